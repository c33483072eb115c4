#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    racestats::run().await
}
