use practice_hub::{Service, core::start};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    start(Service::Users).await
}
