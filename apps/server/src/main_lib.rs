use std::sync::Arc;

use crate::{auth::AuthManager, config::Config};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use summit_ai::{AdvisorService, AdvisorServiceTrait, RigCompletionBackend};
use summit_core::{
    achievements::{AchievementService, AchievementServiceTrait},
    dashboard::{DashboardService, DashboardStore},
    goals::{GoalService, GoalServiceTrait},
    milestones::{MilestoneService, MilestoneServiceTrait},
    preferences::{PreferenceService, PreferenceServiceTrait},
    streaks::{StreakService, StreakServiceTrait},
    tasks::{TaskService, TaskServiceTrait},
};
use summit_storage_sqlite::{
    achievements::AchievementRepository,
    db::{self, write_actor},
    goals::GoalRepository,
    milestones::MilestoneRepository,
    preferences::PreferenceRepository,
    recommendations::RecommendationRepository,
    tasks::TaskRepository,
};

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub task_service: Arc<dyn TaskServiceTrait>,
    pub achievement_service: Arc<dyn AchievementServiceTrait>,
    pub milestone_service: Arc<dyn MilestoneServiceTrait>,
    pub streak_service: Arc<dyn StreakServiceTrait>,
    pub preference_service: Arc<dyn PreferenceServiceTrait>,
    pub dashboard_store: Arc<DashboardStore>,
    pub advisor_service: Arc<dyn AdvisorServiceTrait>,
    pub auth: Option<Arc<AuthManager>>,
    pub http_client: reqwest::Client,
    pub checkout_url: Option<String>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("SUMMIT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let goal_service: Arc<dyn GoalServiceTrait> = Arc::new(GoalService::new(goal_repository));

    let task_repository = Arc::new(TaskRepository::new(pool.clone(), writer.clone()));
    let task_service: Arc<dyn TaskServiceTrait> = Arc::new(TaskService::new(task_repository));

    let achievement_repository =
        Arc::new(AchievementRepository::new(pool.clone(), writer.clone()));
    let achievement_service: Arc<dyn AchievementServiceTrait> =
        Arc::new(AchievementService::new(achievement_repository));

    let milestone_repository = Arc::new(MilestoneRepository::new(pool.clone(), writer.clone()));
    let milestone_service: Arc<dyn MilestoneServiceTrait> =
        Arc::new(MilestoneService::new(milestone_repository));

    // Preferences and streaks share one repository: the streak counters
    // live on the user_preferences row.
    let preference_repository = Arc::new(PreferenceRepository::new(pool.clone(), writer.clone()));
    let preference_service: Arc<dyn PreferenceServiceTrait> =
        Arc::new(PreferenceService::new(preference_repository.clone()));
    let streak_service: Arc<dyn StreakServiceTrait> =
        Arc::new(StreakService::new(preference_repository));

    let dashboard_service = Arc::new(DashboardService::new(
        goal_service.clone(),
        task_service.clone(),
        achievement_service.clone(),
        milestone_service.clone(),
        streak_service.clone(),
    ));
    let dashboard_store = Arc::new(DashboardStore::new(dashboard_service));

    let recommendation_repository =
        Arc::new(RecommendationRepository::new(pool.clone(), writer.clone()));
    let completion_backend = Arc::new(RigCompletionBackend::new(config.advisor.clone()));
    let advisor_service: Arc<dyn AdvisorServiceTrait> = Arc::new(AdvisorService::new(
        completion_backend,
        goal_service.clone(),
        task_service.clone(),
        preference_service.clone(),
        recommendation_repository,
    ));

    let auth = config
        .auth
        .as_ref()
        .map(|auth_config| Arc::new(AuthManager::new(auth_config, config)));

    Ok(Arc::new(AppState {
        goal_service,
        task_service,
        achievement_service,
        milestone_service,
        streak_service,
        preference_service,
        dashboard_store,
        advisor_service,
        auth,
        http_client: reqwest::Client::new(),
        checkout_url: config.checkout_url.clone(),
        db_path,
    }))
}
