use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    pub setup: &'a mut TestContext,
}
