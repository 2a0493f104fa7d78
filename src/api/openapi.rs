//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    auth, authors, books, categories, fines, health, items, loans, magazines, newspapers,
    publishers, users,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "1.0.0",
        description = "Library catalog and circulation REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::database_check,
        // Auth
        auth::login,
        auth::me,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Publishers
        publishers::list_publishers,
        publishers::get_publisher,
        publishers::create_publisher,
        publishers::update_publisher,
        publishers::delete_publisher,
        // Categories
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Magazines
        magazines::list_magazines,
        magazines::get_magazine,
        magazines::create_magazine,
        magazines::update_magazine,
        magazines::delete_magazine,
        // Newspapers
        newspapers::list_newspapers,
        newspapers::get_newspaper,
        newspapers::create_newspaper,
        newspapers::update_newspaper,
        newspapers::delete_newspaper,
        // Items
        items::list_items,
        items::list_items_by_material,
        items::get_item,
        items::create_item,
        items::update_item,
        items::delete_item,
        // Loans
        loans::list_loans,
        loans::get_loan,
        loans::create_loan,
        loans::update_loan,
        loans::return_loan,
        loans::delete_loan,
        // Fines
        fines::list_fines,
        fines::get_fine,
        fines::create_fine,
        fines::update_fine,
        fines::pay_fine,
        fines::delete_fine,
    ),
    components(
        schemas(
            // Users and auth
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            crate::models::user::LoginRequest,
            crate::models::user::LoginResponse,
            crate::models::user::LoginUser,
            crate::models::audit::ActorId,
            // Authors
            crate::models::author::Author,
            crate::models::author::CreateAuthor,
            crate::models::author::UpdateAuthor,
            // Publishers
            crate::models::publisher::Publisher,
            crate::models::publisher::CreatePublisher,
            crate::models::publisher::UpdatePublisher,
            // Categories
            crate::models::category::Category,
            crate::models::category::CreateCategory,
            crate::models::category::UpdateCategory,
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Magazines
            crate::models::magazine::Magazine,
            crate::models::magazine::CreateMagazine,
            crate::models::magazine::UpdateMagazine,
            // Newspapers
            crate::models::newspaper::Newspaper,
            crate::models::newspaper::CreateNewspaper,
            crate::models::newspaper::UpdateNewspaper,
            // Items
            crate::models::item::ItemResponse,
            crate::models::item::CreateItem,
            crate::models::item::UpdateItem,
            crate::models::material::MaterialSummary,
            // Loans
            crate::models::loan::Loan,
            crate::models::loan::CreateLoan,
            crate::models::loan::UpdateLoan,
            crate::models::loan::ReturnLoan,
            // Fines
            crate::models::fine::Fine,
            crate::models::fine::CreateFine,
            crate::models::fine::UpdateFine,
            crate::models::fine::PayFine,
            // Enums
            crate::models::enums::MaterialKind,
            crate::models::enums::ItemCondition,
            crate::models::enums::LoanState,
            crate::models::enums::FineState,
            // Envelopes
            crate::api::RespuestaAPI,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "usuarios", description = "User management"),
        (name = "autores", description = "Author catalog"),
        (name = "editoriales", description = "Publisher catalog"),
        (name = "categorias", description = "Category catalog"),
        (name = "libros", description = "Book catalog"),
        (name = "revistas", description = "Magazine catalog"),
        (name = "periodicos", description = "Newspaper catalog"),
        (name = "items", description = "Physical copy management"),
        (name = "prestamos", description = "Loan management"),
        (name = "multas", description = "Fine management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
