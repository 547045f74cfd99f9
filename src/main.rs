use std::path::Path;
use std::process::ExitCode;
use vorify_mock_server::mock_api::config::{get_mock_config, MOCK_CONFIG_PATH};
use vorify_mock_server::start_api_server;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = get_mock_config(Path::new(MOCK_CONFIG_PATH));

    match start_api_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
