use std::time::Duration;

use staff_console::config::{get_config, init_config};
use staff_console::controllers::{JobsController, UsersController};
use staff_console::services::data_service::DataService;
use staff_console::services::remote::ServiceClient;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let client = ServiceClient::new(
        &config.service_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let data = DataService::new(&client);

    let mut jobs = JobsController::new(data.clone());
    let mut users = UsersController::new(data);

    jobs.load().await?;
    users.load().await?;

    info!(
        service_url = %config.service_url,
        jobs = jobs.records().len(),
        users = users.records().len(),
        "connected to data service, initial collections loaded"
    );

    Ok(())
}
