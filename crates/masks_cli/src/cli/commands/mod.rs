pub mod cpf;
pub mod email;
pub mod phone;
