use ms_web::root_routes;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let web_rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("could not construct Tokio runtime");

    let server = async {
        let app = root_routes();
        let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
        tracing::info!("listening on {}", listener.local_addr()?);
        axum::serve(listener, app).await
    };
    web_rt.block_on(server).expect("server terminated");
}
