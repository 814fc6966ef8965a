// src/views.rs
//
// Camada de visão: um struct de template por página. Apresentação apenas,
// nenhuma regra de negócio vive aqui.

pub mod customers;
pub mod error;
pub mod interactions;
pub mod leads;
pub mod pages;
