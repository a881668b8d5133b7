#[tokio::main]
async fn main() {
    chef_platform::run().await;
}
