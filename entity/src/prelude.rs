pub use super::corporation_member::Entity as CorporationMember;
pub use super::director_character::Entity as DirectorCharacter;
pub use super::director_token::Entity as DirectorToken;
pub use super::eve_character::Entity as EveCharacter;
pub use super::eve_character_token::Entity as EveCharacterToken;
pub use super::eve_corporation::Entity as EveCorporation;
