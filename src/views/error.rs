// src/views/error.rs

use askama::Template;

/// Página genérica de erro; o status e a mensagem vêm do AppError.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPageTemplate {
    pub status: u16,
    pub message: String,
}
