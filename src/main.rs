#[tokio::main]
async fn main() {
    farm_to_table_backend::run().await;
}
