use crate::TestContext;

pub mod data;

impl TestContext {
    pub fn director<'a>(&'a mut self) -> DirectorFixtures<'a> {
        DirectorFixtures { setup: self }
    }
}

pub struct DirectorFixtures<'a> {
    pub setup: &'a mut TestContext,
}
