//! Sample api responses for tests.
//!
//! The samples live next to this crate. `qvapay-client` tests load them too, and cargo runs
//! those with their own manifest dir, so the path is fixed when `qvapay-core` is compiled.
pub fn read_fixture(name: &str) -> anyhow::Result<String> {
    let path = format!("{}/src/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    Ok(std::fs::read_to_string(path)?.trim().to_owned())
}

pub fn read_fixture_as<T>(name: &str) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    Ok(serde_json::from_str::<T>(&read_fixture(name)?)?)
}
