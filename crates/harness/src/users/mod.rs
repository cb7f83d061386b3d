//! User-management resource under test

pub mod scenarios;
pub mod specs;
