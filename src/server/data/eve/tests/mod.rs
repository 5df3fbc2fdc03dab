use corp_tracker_test_utils::prelude::*;
