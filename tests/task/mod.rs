mod member_tracking;
