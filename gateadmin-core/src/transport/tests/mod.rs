mod exchange_tests;
pub(crate) mod test_helpers;
mod version_tests;
