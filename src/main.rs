use actix_files as fs;
use actix_web::{
    get, middleware::Logger, web, App, HttpResponse, HttpServer, Result as ActixResult,
};
use clap::Parser;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Static page host for the wavedrop client.
///
/// Serves the HTML shell and the compiled WASM bundle; every page route
/// falls back to the shell so the client-side router owns navigation.
/// The `/api/*` endpoints live on the audio service itself — this host
/// never implements them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

// Serve the HTML shell
#[get("/")]
async fn index() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().content_type("text/html").body(INDEX_HTML))
}

// Every non-asset route gets the same shell; the client router takes over.
async fn page_shell() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().content_type("text/html").body(INDEX_HTML))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    env_logger::init();

    log::info!("Starting page host at http://{}:{}", args.bind, args.port);

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .service(index)
            // Serve static files (shell assets, compiled WASM bundle)
            .service(fs::Files::new("/static", "./static"))
            .default_service(web::route().to(page_shell))
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await
}
