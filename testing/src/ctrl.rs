use blogctrl::platform::Platform;
use std::sync::Arc;

use crate::sqlite::{
    Fixture,
    create_sqlite_fixture,
};

pub async fn create_sqlite_platform() -> anyhow::Result<(Platform, Fixture)> {
    let (backend, fixture) = create_sqlite_fixture().await?;
    Ok((Platform::new(Arc::new(backend)), fixture))
}
