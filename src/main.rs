use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};

use fairway_pulse::args::{self, Args};
use fairway_pulse::cache::new_cycle_cache;
use fairway_pulse::controller::dashboard::{dashboard, dashboard_predictions};
use fairway_pulse::controller::feed::FeedConfig;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();
    let bind = args.bind.clone();

    let feed_config = FeedConfig::from_args(&args);
    let cache = new_cycle_cache();
    let args_for_web = args.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(feed_config.clone()))
            .app_data(Data::new(cache.clone()))
            .app_data(Data::new(args_for_web.clone()))
            .route("/", web::get().to(index))
            .route("/dashboard", web::get().to(dashboard))
            .route("/dashboard/predictions", web::get().to(dashboard_predictions))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static").show_files_listing()) // Serve the static files
    })
    .bind(bind)?
    .run()
    .await?;
    Ok(())
}

async fn index(args: Data<Args>) -> impl Responder {
    let markup =
        fairway_pulse::view::index::render_index_template(args.title.clone(), args.refresh_secs);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
