use std::sync::Arc;

use business::domain::auth::state::AuthState;
use business::domain::events::EventBus;
use business::domain::logger::Logger;
use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryLocal;
use persistence::favorite::repository::FavoriteRepositoryLocal;
use persistence::session::repository::SessionRepositoryLocal;
use persistence::store::{FileStore, LocalStore};

use remote_api::auth_gateway::AuthGatewayHttp;
use remote_api::catalog_gateway::CatalogGatewayHttp;
use remote_api::client::ApiClient;
use remote_api::order_gateway::OrderGatewayHttp;

use business::application::auth::get_current_user::GetCurrentUserUseCaseImpl;
use business::application::auth::login::LoginUseCaseImpl;
use business::application::auth::logout::LogoutUseCaseImpl;
use business::application::auth::register::RegisterUseCaseImpl;
use business::application::auth::restore_session::RestoreSessionUseCaseImpl;
use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get_items::GetCartItemsUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::summary::GetCartSummaryUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::catalog::get_all::GetAllCoffeesUseCaseImpl;
use business::application::catalog::get_by_id::GetCoffeeByIdUseCaseImpl;
use business::application::catalog::recommend::RecommendCoffeesUseCaseImpl;
use business::application::favorite::get_all::GetFavoritesUseCaseImpl;
use business::application::favorite::get_coffees::GetFavoriteCoffeesUseCaseImpl;
use business::application::favorite::toggle::ToggleFavoriteUseCaseImpl;
use business::application::order::checkout::CheckoutUseCaseImpl;
use business::application::order::get_history::GetOrderHistoryUseCaseImpl;
use business::application::order::reorder::ReorderUseCaseImpl;
use business::domain::cart::use_cases::summary::GetCartSummaryUseCase;

use crate::commands::auth::handlers::AuthCommands;
use crate::commands::cart::handlers::CartCommands;
use crate::commands::catalog::handlers::CatalogCommands;
use crate::commands::favorite::handlers::FavoriteCommands;
use crate::commands::order::handlers::OrderCommands;
use crate::config::app_config::AppConfig;
use crate::setup::listeners::CartBadge;

pub struct DependencyContainer {
    pub catalog_commands: CatalogCommands,
    pub cart_commands: CartCommands,
    pub favorite_commands: FavoriteCommands,
    pub auth_commands: AuthCommands,
    pub order_commands: OrderCommands,
    pub cart_summary_use_case: Arc<dyn GetCartSummaryUseCase>,
    pub cart_badge: Arc<CartBadge>,
    pub events: Arc<EventBus>,
    pub store: Arc<FileStore>,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let events = Arc::new(EventBus::new(logger.clone()));
        let auth_state = Arc::new(AuthState::new());

        let cart_badge = Arc::new(CartBadge::new());
        cart_badge.attach(&events);

        // Infrastructure adapters
        let store = Arc::new(FileStore::open(config.store.path.clone()).await);
        let local_store: Arc<dyn LocalStore> = store.clone();
        let cart_repository = Arc::new(CartRepositoryLocal::new(local_store.clone()));
        let favorite_repository = Arc::new(FavoriteRepositoryLocal::new(local_store.clone()));
        let session_repository = Arc::new(SessionRepositoryLocal::new(local_store));

        let api_client = ApiClient::new(config.api.base_url_str(), config.api.timeout)
            .with_sessions(session_repository.clone());
        let auth_gateway = Arc::new(AuthGatewayHttp::new(api_client.clone()));
        let catalog_gateway = Arc::new(CatalogGatewayHttp::new(api_client.clone()));
        let order_gateway = Arc::new(OrderGatewayHttp::new(api_client));

        // Catalog use cases
        let get_all_coffees_use_case = Arc::new(GetAllCoffeesUseCaseImpl {
            catalog: catalog_gateway.clone(),
            logger: logger.clone(),
        });
        let get_coffee_use_case = Arc::new(GetCoffeeByIdUseCaseImpl {
            catalog: catalog_gateway.clone(),
            logger: logger.clone(),
        });
        let recommend_use_case = Arc::new(RecommendCoffeesUseCaseImpl {
            catalog: catalog_gateway.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let add_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            events: events.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateCartQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            events: events.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            events: events.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartItemsUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository.clone(),
            events: events.clone(),
            logger: logger.clone(),
        });
        let cart_summary_use_case = Arc::new(GetCartSummaryUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });

        // Favorite use cases
        let toggle_favorite_use_case = Arc::new(ToggleFavoriteUseCaseImpl {
            repository: favorite_repository.clone(),
            logger: logger.clone(),
        });
        let get_favorites_use_case = Arc::new(GetFavoritesUseCaseImpl {
            repository: favorite_repository.clone(),
            logger: logger.clone(),
        });
        let get_favorite_coffees_use_case = Arc::new(GetFavoriteCoffeesUseCaseImpl {
            repository: favorite_repository,
            catalog: catalog_gateway.clone(),
            logger: logger.clone(),
        });

        // Auth use cases
        let login_use_case = Arc::new(LoginUseCaseImpl {
            service: auth_gateway.clone(),
            sessions: session_repository.clone(),
            state: auth_state.clone(),
            logger: logger.clone(),
        });
        let register_use_case = Arc::new(RegisterUseCaseImpl {
            service: auth_gateway.clone(),
            sessions: session_repository.clone(),
            state: auth_state.clone(),
            logger: logger.clone(),
        });
        let logout_use_case = Arc::new(LogoutUseCaseImpl {
            sessions: session_repository.clone(),
            state: auth_state.clone(),
            logger: logger.clone(),
        });
        let get_current_user_use_case = Arc::new(GetCurrentUserUseCaseImpl {
            service: auth_gateway.clone(),
            sessions: session_repository.clone(),
            state: auth_state.clone(),
            logger: logger.clone(),
        });
        let restore_session_use_case = Arc::new(RestoreSessionUseCaseImpl {
            sessions: session_repository.clone(),
            state: auth_state,
            logger: logger.clone(),
        });

        // Order use cases
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            service: order_gateway,
            cart: cart_repository.clone(),
            sessions: session_repository.clone(),
            events: events.clone(),
            logger: logger.clone(),
        });
        let order_history_use_case = Arc::new(GetOrderHistoryUseCaseImpl {
            service: auth_gateway,
            catalog: catalog_gateway,
            sessions: session_repository,
            logger: logger.clone(),
        });
        let reorder_use_case = Arc::new(ReorderUseCaseImpl {
            repository: cart_repository,
            events: events.clone(),
            logger,
        });

        let catalog_commands = CatalogCommands::new(
            get_all_coffees_use_case,
            get_coffee_use_case.clone(),
            recommend_use_case,
        );

        let cart_commands = CartCommands::new(
            get_coffee_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            get_cart_use_case.clone(),
            clear_cart_use_case,
        );

        let favorite_commands = FavoriteCommands::new(
            toggle_favorite_use_case,
            get_favorites_use_case,
            get_favorite_coffees_use_case,
        );

        let auth_commands = AuthCommands::new(
            login_use_case,
            register_use_case,
            logout_use_case,
            get_current_user_use_case,
        );

        let order_commands = OrderCommands::new(
            checkout_use_case,
            get_cart_use_case,
            restore_session_use_case,
            order_history_use_case,
            reorder_use_case,
        );

        Ok(Self {
            catalog_commands,
            cart_commands,
            favorite_commands,
            auth_commands,
            order_commands,
            cart_summary_use_case,
            cart_badge,
            events,
            store,
        })
    }
}
