use std::sync::Arc;

use coursely_infra::{CourseStore, InMemoryCourseStore, PostgresCourseStore};

#[tokio::main]
async fn main() {
    coursely_observability::init();

    let store: Arc<dyn CourseStore> = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let store = PostgresCourseStore::connect(&url)
                .await
                .expect("failed to connect to database");
            tracing::info!("using postgres course store");
            Arc::new(store)
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using in-memory course store");
            Arc::new(InMemoryCourseStore::new())
        }
    };

    let app = coursely_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("failed to bind 0.0.0.0:3000");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
