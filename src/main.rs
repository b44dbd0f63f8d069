use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use diligence_engine::config::AppConfig;
use diligence_engine::error::AppError;
use diligence_engine::telemetry;
use diligence_engine::workflows::questionnaire::{
    normalize, GeneratedQuestionnaire, ProfileSubmission, QuestionnaireEngine,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    engine: Arc<QuestionnaireEngine>,
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Diligence Questionnaire Engine",
    about = "Generate tailored technical due-diligence questionnaires from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with questionnaires locally
    Questionnaire {
        #[command(subcommand)]
        command: QuestionnaireCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum QuestionnaireCommand {
    /// Generate a questionnaire for an engagement profile
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Path to a JSON engagement profile (defaults to a built-in sample)
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Emit the raw JSON document instead of the rendered text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Questionnaire {
            command: QuestionnaireCommand::Generate(args),
        } => run_generate(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        engine: Arc::new(QuestionnaireEngine::standard()),
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = build_router(state, prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "diligence questionnaire service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState, prometheus_layer: PrometheusMetricLayer<'static>) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/questionnaire/generate", post(generate_endpoint))
        .layer(prometheus_layer)
        .with_state(state)
}

fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let submission = match args.profile {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<ProfileSubmission>(&raw)?
        }
        None => sample_submission(),
    };

    let profile = normalize(submission)?;
    let engine = QuestionnaireEngine::standard();
    let questionnaire = engine.generate(&profile);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&questionnaire)?);
    } else {
        render_questionnaire(&questionnaire);
    }

    Ok(())
}

/// Built-in demo profile: EU carve-out of a scaling B2B SaaS target.
fn sample_submission() -> ProfileSubmission {
    ProfileSubmission {
        transaction_type: "carve-out".to_string(),
        product_type: "b2b-saas".to_string(),
        tech_archetype: "hybrid-legacy".to_string(),
        headcount: "51-200".to_string(),
        revenue_range: "5-25m".to_string(),
        growth_stage: "scaling".to_string(),
        company_age: "5-10yr".to_string(),
        geographies: vec!["eu".to_string()],
        business_model: "subscription".to_string(),
        scale_intensity: "moderate".to_string(),
        transformation_state: "stable".to_string(),
        data_sensitivity: "pii".to_string(),
        operating_model: "in-house".to_string(),
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        serde_json::json!({ "status": "ready" })
    } else {
        serde_json::json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn generate_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<ProfileSubmission>,
) -> Result<Json<GeneratedQuestionnaire>, AppError> {
    let profile = normalize(payload)?;
    Ok(Json(state.engine.generate(&profile)))
}

fn render_questionnaire(questionnaire: &GeneratedQuestionnaire) {
    println!("Technical due-diligence questionnaire");
    println!(
        "Generated {} | {} questions across {} topics",
        questionnaire.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
        questionnaire.metadata.total_questions,
        questionnaire.topics.len()
    );

    for group in &questionnaire.topics {
        println!("\n{} (interview: {})", group.label, group.audience);
        for (index, question) in group.questions.iter().enumerate() {
            println!(
                "{}. [{}] {}",
                index + 1,
                question.priority_label,
                question.prompt
            );
            println!("   Why: {}", question.rationale);
            if let Some(strategic) = &question.strategic {
                println!(
                    "   Watch for: {} (workstream: {})",
                    strategic.warning_sign, strategic.workstream
                );
            }
        }
    }

    if questionnaire.risk_annotations.is_empty() {
        println!("\nRisk annotations: none");
    } else {
        println!("\nRisk annotations");
        for annotation in &questionnaire.risk_annotations {
            println!(
                "- [{}] {}: {}",
                annotation.severity_label, annotation.title, annotation.detail
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_state() -> (AppState, PrometheusMetricLayer<'static>) {
        let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
        let state = AppState {
            engine: Arc::new(QuestionnaireEngine::standard()),
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: prometheus_handle,
        };
        (state, prometheus_layer)
    }

    fn sample_payload() -> Value {
        json!({
            "transaction_type": "carve-out",
            "product_type": "b2b-saas",
            "tech_archetype": "hybrid-legacy",
            "headcount": "51-200",
            "revenue_range": "5-25m",
            "growth_stage": "scaling",
            "company_age": "5-10yr",
            "geographies": ["eu"],
            "business_model": "subscription",
            "scale_intensity": "moderate",
            "transformation_state": "stable",
            "data_sensitivity": "pii",
            "operating_model": "in-house"
        })
    }

    #[tokio::test]
    async fn generate_route_returns_questionnaire_and_rejects_empty_geographies() {
        let (state, prometheus_layer) = test_state();
        let app = build_router(state, prometheus_layer);

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/questionnaire/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(sample_payload().to_string()))
            .expect("request builds");
        let response = app.clone().oneshot(request).await.expect("route responds");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: Value = serde_json::from_slice(&bytes).expect("body is json");
        let total = body["metadata"]["total_questions"]
            .as_u64()
            .expect("total present");
        assert!((15..=20).contains(&total));

        let mut invalid = sample_payload();
        invalid["geographies"] = json!([]);
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/questionnaire/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(invalid.to_string()))
            .expect("request builds");
        let response = app.oneshot(request).await.expect("route responds");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn sample_submission_normalizes() {
        let profile = normalize(sample_submission()).expect("sample is structurally valid");
        assert_eq!(profile.geographies, vec!["eu".to_string()]);
    }
}
