mod fixture;

pub use fixture::FixtureRecord;
