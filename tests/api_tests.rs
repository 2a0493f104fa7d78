//! API integration tests
//!
//! These tests drive a running server (`cargo run`) backed by a migrated
//! Postgres database. All data they need is created through the API itself.

use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:8000/api";

fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// Create a user through the API and return its id.
async fn create_actor(client: &Client) -> String {
    let username = unique("staff");
    let response = client
        .post(format!("{}/usuarios", BASE_URL))
        .json(&json!({
            "nombre": "Staff User",
            "nombre_usuario": username,
            "email": format!("{}@biblioteca.test", username),
            "contraseña": "super-secret-1",
            "es_admin": true
        }))
        .send()
        .await
        .expect("Failed to create user");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse user");
    body["id"].as_str().expect("No user id").to_string()
}

/// Create an author, a publisher and a category, returning their ids.
async fn create_catalog(client: &Client, actor: &str) -> (String, String, String) {
    let response = client
        .post(format!("{}/autores", BASE_URL))
        .json(&json!({
            "nombre": unique("Autor"),
            "nacionalidad": "Colombiana",
            "id_usuario_creacion": actor
        }))
        .send()
        .await
        .expect("Failed to create author");
    assert_eq!(response.status(), 201);
    let author: Value = response.json().await.expect("Failed to parse author");

    let response = client
        .post(format!("{}/editoriales", BASE_URL))
        .json(&json!({
            "nombre": unique("Editorial"),
            "id_usuario_creacion": actor
        }))
        .send()
        .await
        .expect("Failed to create publisher");
    assert_eq!(response.status(), 201);
    let publisher: Value = response.json().await.expect("Failed to parse publisher");

    let response = client
        .post(format!("{}/categorias", BASE_URL))
        .json(&json!({
            "nombre": unique("Categoria"),
            "id_usuario_creacion": actor
        }))
        .send()
        .await
        .expect("Failed to create category");
    assert_eq!(response.status(), 201);
    let category: Value = response.json().await.expect("Failed to parse category");

    (
        author["id"].as_str().expect("No author id").to_string(),
        publisher["id"].as_str().expect("No publisher id").to_string(),
        category["id"].as_str().expect("No category id").to_string(),
    )
}

async fn create_book(client: &Client, actor: &str, author: &str, publisher: &str) -> String {
    let response = client
        .post(format!("{}/libros", BASE_URL))
        .json(&json!({
            "titulo": unique("Libro"),
            "id_autor": author,
            "id_editorial": publisher,
            "id_usuario_creacion": actor
        }))
        .send()
        .await
        .expect("Failed to create book");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse book");
    body["id"].as_str().expect("No book id").to_string()
}

async fn create_item(client: &Client, actor: &str, book: &str) -> Value {
    let response = client
        .post(format!("{}/items", BASE_URL))
        .json(&json!({
            "id_libro": book,
            "codigo_barras": unique("BC"),
            "id_usuario_creacion": actor
        }))
        .send()
        .await
        .expect("Failed to create item");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse item")
}

/// Create a ready-to-loan item together with its catalog chain.
async fn create_loanable_item(client: &Client, actor: &str) -> Value {
    let (author, publisher, _) = create_catalog(client, actor).await;
    let book = create_book(client, actor, &author, &publisher).await;
    create_item(client, actor, &book).await
}

async fn get_item(client: &Client, id: &str) -> Value {
    let response = client
        .get(format!("{}/items/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to get item");
    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse item")
}

async fn create_loan(client: &Client, actor: &str, item: &str, user: &str) -> Value {
    let response = client
        .post(format!("{}/prestamos", BASE_URL))
        .json(&json!({
            "id_item": item,
            "id_usuario": user,
            "id_usuario_creacion": actor
        }))
        .send()
        .await
        .expect("Failed to create loan");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse loan")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_database_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health/db", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_login_and_me() {
    let client = Client::new();
    let username = unique("lector");

    let response = client
        .post(format!("{}/usuarios", BASE_URL))
        .json(&json!({
            "nombre": "Lector de Prueba",
            "nombre_usuario": username,
            "email": format!("{}@biblioteca.test", username),
            "contraseña": "super-secret-1"
        }))
        .send()
        .await
        .expect("Failed to create user");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "nombre_usuario": username,
            "contraseña": "super-secret-1"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["access_token"].is_string());
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["nombre_usuario"], username.to_lowercase());

    let token = body["access_token"].as_str().expect("No token");
    let response = client
        .get(format!("{}/auth/me", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let me: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(me["id"], body["user"]["id"]);
}

#[tokio::test]
#[ignore]
async fn test_login_by_email() {
    let client = Client::new();
    let username = unique("lector");
    let email = format!("{}@biblioteca.test", username);

    let response = client
        .post(format!("{}/usuarios", BASE_URL))
        .json(&json!({
            "nombre": "Lector de Prueba",
            "nombre_usuario": username,
            "email": email,
            "contraseña": "super-secret-1"
        }))
        .send()
        .await
        .expect("Failed to create user");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "nombre_usuario": email,
            "contraseña": "super-secret-1"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();
    let actor = create_actor(&client).await;

    let response = client
        .get(format!("{}/usuarios/{}", BASE_URL, actor))
        .send()
        .await
        .expect("Failed to get user");
    let user: Value = response.json().await.expect("Failed to parse user");

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "nombre_usuario": user["nombre_usuario"],
            "contraseña": "wrong-password"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_login_rejected_for_inactive_user() {
    let client = Client::new();
    let username = unique("baja");

    let response = client
        .post(format!("{}/usuarios", BASE_URL))
        .json(&json!({
            "nombre": "Usuario de Baja",
            "nombre_usuario": username,
            "email": format!("{}@biblioteca.test", username),
            "contraseña": "super-secret-1"
        }))
        .send()
        .await
        .expect("Failed to create user");
    assert_eq!(response.status(), 201);
    let user: Value = response.json().await.expect("Failed to parse user");
    let user_id = user["id"].as_str().expect("No user id");

    let response = client
        .delete(format!("{}/usuarios/{}", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to delete user");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "nombre_usuario": username,
            "contraseña": "super-secret-1"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_user_soft_delete_is_idempotent() {
    let client = Client::new();
    let user_id = create_actor(&client).await;

    let response = client
        .delete(format!("{}/usuarios/{}", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to delete user");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);

    // Deleting again still reports success
    let response = client
        .delete(format!("{}/usuarios/{}", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to delete user");
    assert_eq!(response.status(), 200);

    // The row survives with activo = false
    let response = client
        .get(format!("{}/usuarios/{}", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to get user");
    assert!(response.status().is_success());
    let user: Value = response.json().await.expect("Failed to parse user");
    assert_eq!(user["activo"], false);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_username_conflict() {
    let client = Client::new();
    let username = unique("dup");

    for expected in [201, 409] {
        let response = client
            .post(format!("{}/usuarios", BASE_URL))
            .json(&json!({
                "nombre": "Usuario Duplicado",
                "nombre_usuario": username,
                "email": format!("{}@biblioteca.test", unique("dup")),
                "contraseña": "super-secret-1"
            }))
            .send()
            .await
            .expect("Failed to create user");
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
#[ignore]
async fn test_author_crud() {
    let client = Client::new();
    let actor = create_actor(&client).await;

    let response = client
        .post(format!("{}/autores", BASE_URL))
        .json(&json!({
            "nombre": "  Gabriel García Márquez  ",
            "nacionalidad": "Colombiana",
            "id_usuario_creacion": actor
        }))
        .send()
        .await
        .expect("Failed to create author");
    assert_eq!(response.status(), 201);
    let author: Value = response.json().await.expect("Failed to parse author");
    let author_id = author["id"].as_str().expect("No author id");
    // Leading and trailing whitespace is trimmed on the way in
    assert_eq!(author["nombre"], "Gabriel García Márquez");

    let response = client
        .put(format!("{}/autores/{}", BASE_URL, author_id))
        .json(&json!({
            "bibliografia": "Cien años de soledad, El amor en los tiempos del cólera",
            "id_usuario_edicion": actor
        }))
        .send()
        .await
        .expect("Failed to update author");
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.expect("Failed to parse author");
    assert!(updated["bibliografia"].as_str().unwrap().starts_with("Cien años"));

    let response = client
        .delete(format!("{}/autores/{}", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to delete author");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);

    let response = client
        .get(format!("{}/autores/{}", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to get author");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_category_name_is_unique() {
    let client = Client::new();
    let actor = create_actor(&client).await;
    let nombre = unique("Novela");

    for (nombre, expected) in [(nombre.clone(), 201), (nombre.to_uppercase(), 409)] {
        let response = client
            .post(format!("{}/categorias", BASE_URL))
            .json(&json!({
                "nombre": nombre,
                "id_usuario_creacion": actor
            }))
            .send()
            .await
            .expect("Failed to create category");
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
#[ignore]
async fn test_book_requires_existing_references() {
    let client = Client::new();
    let actor = create_actor(&client).await;
    let (author, _, _) = create_catalog(&client, &actor).await;

    let response = client
        .post(format!("{}/libros", BASE_URL))
        .json(&json!({
            "titulo": "Libro sin editorial",
            "id_autor": author,
            "id_editorial": Uuid::new_v4(),
            "id_usuario_creacion": actor
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error_type"], "VALIDATION_ERROR");
}

#[tokio::test]
#[ignore]
async fn test_item_requires_exactly_one_material() {
    let client = Client::new();
    let actor = create_actor(&client).await;
    let (author, publisher, _) = create_catalog(&client, &actor).await;
    let book = create_book(&client, &actor, &author, &publisher).await;

    // No material reference at all
    let response = client
        .post(format!("{}/items", BASE_URL))
        .json(&json!({ "id_usuario_creacion": actor }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Two material references
    let response = client
        .post(format!("{}/items", BASE_URL))
        .json(&json!({
            "id_libro": book,
            "id_revista": Uuid::new_v4(),
            "id_usuario_creacion": actor
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_item_material_reference_is_immutable() {
    let client = Client::new();
    let actor = create_actor(&client).await;
    let item = create_loanable_item(&client, &actor).await;
    let item_id = item["id"].as_str().expect("No item id");

    let response = client
        .put(format!("{}/items/{}", BASE_URL, item_id))
        .json(&json!({
            "id_libro": Uuid::new_v4(),
            "id_usuario_edicion": actor
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_item_barcode_conflict() {
    let client = Client::new();
    let actor = create_actor(&client).await;
    let (author, publisher, _) = create_catalog(&client, &actor).await;
    let book = create_book(&client, &actor, &author, &publisher).await;
    let barcode = unique("BC");

    for expected in [201, 409] {
        let response = client
            .post(format!("{}/items", BASE_URL))
            .json(&json!({
                "id_libro": book,
                "codigo_barras": barcode,
                "id_usuario_creacion": actor
            }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
#[ignore]
async fn test_items_by_material() {
    let client = Client::new();
    let actor = create_actor(&client).await;
    let (author, publisher, _) = create_catalog(&client, &actor).await;
    let book = create_book(&client, &actor, &author, &publisher).await;
    create_item(&client, &actor, &book).await;
    create_item(&client, &actor, &book).await;

    let response = client
        .get(format!("{}/items/por-material/libro/{}", BASE_URL, book))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let items: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(items.as_array().expect("Not an array").len(), 2);

    // Unknown material id yields an empty list, not an error
    let response = client
        .get(format!(
            "{}/items/por-material/libro/{}",
            BASE_URL,
            Uuid::new_v4()
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let items: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(items.as_array().expect("Not an array").len(), 0);

    // Unknown material kind is a validation error
    let response = client
        .get(format!("{}/items/por-material/cassette/{}", BASE_URL, book))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_loan_lifecycle() {
    let client = Client::new();
    let actor = create_actor(&client).await;
    let item = create_loanable_item(&client, &actor).await;
    let item_id = item["id"].as_str().expect("No item id");
    assert_eq!(item["disponible"], true);

    let loan = create_loan(&client, &actor, item_id, &actor).await;
    let loan_id = loan["id"].as_str().expect("No loan id");
    assert_eq!(loan["estado"], "activo");
    assert!(loan["fecha_devolucion_estimada"].is_string());

    // The item is now checked out
    let item = get_item(&client, item_id).await;
    assert_eq!(item["disponible"], false);

    // A second loan on the same item is rejected
    let response = client
        .post(format!("{}/prestamos", BASE_URL))
        .json(&json!({
            "id_item": item_id,
            "id_usuario": actor,
            "id_usuario_creacion": actor
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Return the loan
    let response = client
        .post(format!("{}/prestamos/{}/devolver", BASE_URL, loan_id))
        .json(&json!({ "id_usuario_edicion": actor }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let returned: Value = response.json().await.expect("Failed to parse loan");
    assert_eq!(returned["estado"], "devuelto");
    assert!(returned["fecha_devolucion_real"].is_string());

    // The item is loanable again
    let item = get_item(&client, item_id).await;
    assert_eq!(item["disponible"], true);

    // Another user can now borrow it
    let borrower = create_actor(&client).await;
    let loan = create_loan(&client, &actor, item_id, &borrower).await;
    assert_eq!(loan["estado"], "activo");
    assert_eq!(loan["id_usuario"].as_str(), Some(borrower.as_str()));
}

#[tokio::test]
#[ignore]
async fn test_loan_past_due_date_rejected() {
    let client = Client::new();
    let actor = create_actor(&client).await;
    let item = create_loanable_item(&client, &actor).await;
    let item_id = item["id"].as_str().expect("No item id");

    let response = client
        .post(format!("{}/prestamos", BASE_URL))
        .json(&json!({
            "id_item": item_id,
            "id_usuario": actor,
            "fecha_devolucion_estimada": "2020-01-01T00:00:00",
            "id_usuario_creacion": actor
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    // Without a date the loan defaults to a future return date
    let loan = create_loan(&client, &actor, item_id, &actor).await;
    assert!(loan["fecha_devolucion_estimada"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_delete_active_loan_restores_item() {
    let client = Client::new();
    let actor = create_actor(&client).await;
    let item = create_loanable_item(&client, &actor).await;
    let item_id = item["id"].as_str().expect("No item id");

    let loan = create_loan(&client, &actor, item_id, &actor).await;
    let loan_id = loan["id"].as_str().expect("No loan id");

    let item = get_item(&client, item_id).await;
    assert_eq!(item["disponible"], false);

    let response = client
        .delete(format!("{}/prestamos/{}", BASE_URL, loan_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let item = get_item(&client, item_id).await;
    assert_eq!(item["disponible"], true);
}

#[tokio::test]
#[ignore]
async fn test_item_with_active_loan_cannot_be_deleted() {
    let client = Client::new();
    let actor = create_actor(&client).await;
    let item = create_loanable_item(&client, &actor).await;
    let item_id = item["id"].as_str().expect("No item id");

    create_loan(&client, &actor, item_id, &actor).await;

    let response = client
        .delete(format!("{}/items/{}", BASE_URL, item_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_fine_lifecycle() {
    let client = Client::new();
    let actor = create_actor(&client).await;
    let item = create_loanable_item(&client, &actor).await;
    let item_id = item["id"].as_str().expect("No item id");
    let loan = create_loan(&client, &actor, item_id, &actor).await;
    let loan_id = loan["id"].as_str().expect("No loan id");

    let response = client
        .post(format!("{}/multas", BASE_URL))
        .json(&json!({
            "id_prestamo": loan_id,
            "id_usuario": actor,
            "monto": "25.50",
            "motivo": "Devolución tardía",
            "id_usuario_creacion": actor
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let fine: Value = response.json().await.expect("Failed to parse fine");
    let fine_id = fine["id"].as_str().expect("No fine id");
    assert_eq!(fine["estado"], "pendiente");
    assert_eq!(fine["monto"], "25.50");

    // A second fine for the same loan is a validation error, not a conflict
    let response = client
        .post(format!("{}/multas", BASE_URL))
        .json(&json!({
            "id_prestamo": loan_id,
            "id_usuario": actor,
            "monto": "5.00",
            "id_usuario_creacion": actor
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error_type"], "VALIDATION_ERROR");

    // Pay the fine
    let response = client
        .post(format!("{}/multas/{}/pagar", BASE_URL, fine_id))
        .json(&json!({ "id_usuario_edicion": actor }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let paid: Value = response.json().await.expect("Failed to parse fine");
    assert_eq!(paid["estado"], "pagada");
    assert!(paid["fecha_pago"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_fine_requires_positive_amount() {
    let client = Client::new();
    let actor = create_actor(&client).await;
    let item = create_loanable_item(&client, &actor).await;
    let item_id = item["id"].as_str().expect("No item id");
    let loan = create_loan(&client, &actor, item_id, &actor).await;
    let loan_id = loan["id"].as_str().expect("No loan id");

    let response = client
        .post(format!("{}/multas", BASE_URL))
        .json(&json!({
            "id_prestamo": loan_id,
            "id_usuario": actor,
            "monto": "0",
            "id_usuario_creacion": actor
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_missing_bearer_token_rejected() {
    let client = Client::new();

    let response = client
        .get(format!("{}/auth/me", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}
