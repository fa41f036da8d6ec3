//! Cliente entity - Entità cliente con metodi per gestione password

use super::enums::Perfil;
use bcrypt::{hash, verify};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Cliente {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub cpf_ou_cnpj: String,
    // codice di TipoCliente
    pub tipo: Option<i32>,
    pub senha: String,
    // caricati a parte dalla tabella perfis
    #[sqlx(skip)]
    pub perfis: Vec<Perfil>,
}

impl Cliente {
    /// Verify if target_password matches the stored hashed password
    pub fn verify_password(&self, target_password: &str) -> bool {
        verify(target_password, &self.senha).unwrap_or(false)
    }

    /// Hash a password using bcrypt with the given cost
    pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
        let hash = hash(password, cost)?;
        Ok(hash)
    }
}
