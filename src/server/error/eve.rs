use thiserror::Error;

#[derive(Error, Debug)]
pub enum EveError {
    // Corporations are created when a director registers, a director whose corporation record
    // is gone indicates the record was removed by hand.
    #[error("Corporation {0} is not stored locally, re-register a director of this corporation")]
    CorporationNotFound(i64),
}
