//! Cliente DTOs - Data Transfer Objects per clienti

use super::FieldMessage;
use crate::entities::{Cliente, TipoCliente};
use serde::{Deserialize, Serialize};
use validator::Validate;

// struct per gestire io col client, la password non esce mai
#[derive(Serialize, Deserialize, Debug)]
pub struct ClienteDTO {
    pub id: Option<i32>,
    pub nome: Option<String>,
    pub email: Option<String>,
}

impl From<Cliente> for ClienteDTO {
    fn from(value: Cliente) -> Self {
        Self {
            id: Some(value.id),
            nome: Some(value.nome),
            email: Some(value.email),
        }
    }
}

/// DTO per la registrazione di un nuovo cliente
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClienteDTO {
    #[validate(length(min = 5, max = 120, message = "O tamanho deve ser entre 5 e 120 caracteres"))]
    pub nome: String,

    #[validate(email(message = "Email inválido"))]
    pub email: String,

    pub cpf_ou_cnpj: String,

    // codice di TipoCliente
    pub tipo: i32,

    #[validate(length(min = 1, message = "Preenchimento obrigatório"))]
    pub senha: String,
}

impl CreateClienteDTO {
    /// Controlli che dipendono da più campi: tipo di cliente e documento
    pub fn check_documento(&self) -> Vec<FieldMessage> {
        let mut errors = Vec::new();
        match TipoCliente::to_enum(Some(self.tipo)) {
            Some(TipoCliente::PessoaFisica) if !is_valid_cpf(&self.cpf_ou_cnpj) => {
                errors.push(FieldMessage::new("cpfOuCnpj", "CPF inválido"));
            }
            Some(TipoCliente::PessoaJuridica) if !is_valid_cnpj(&self.cpf_ou_cnpj) => {
                errors.push(FieldMessage::new("cpfOuCnpj", "CNPJ inválido"));
            }
            Some(_) => {}
            None => errors.push(FieldMessage::new("tipo", "Tipo de cliente inválido")),
        }
        errors
    }
}

/// Credenziali per il login
#[derive(Serialize, Deserialize, Debug)]
pub struct CredenciaisDTO {
    pub email: String,
    pub senha: String,
}

fn digits(doc: &str) -> Option<Vec<u32>> {
    doc.chars().map(|c| c.to_digit(10)).collect()
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// CPF: 11 cifre, le ultime due di controllo
pub fn is_valid_cpf(cpf: &str) -> bool {
    let Some(d) = digits(cpf) else {
        return false;
    };
    if d.len() != 11 || d.iter().all(|x| *x == d[0]) {
        return false;
    }
    let dv1 = check_digit(&d[..9], &[10, 9, 8, 7, 6, 5, 4, 3, 2]);
    let dv2 = check_digit(&d[..10], &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2]);
    d[9] == dv1 && d[10] == dv2
}

/// CNPJ: 14 cifre, le ultime due di controllo
pub fn is_valid_cnpj(cnpj: &str) -> bool {
    let Some(d) = digits(cnpj) else {
        return false;
    };
    if d.len() != 14 || d.iter().all(|x| *x == d[0]) {
        return false;
    }
    let dv1 = check_digit(&d[..12], &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);
    let dv2 = check_digit(&d[..13], &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);
    d[12] == dv1 && d[13] == dv2
}
