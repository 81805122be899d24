pub mod certificate;
pub mod names;
pub mod template;
pub mod verification;
