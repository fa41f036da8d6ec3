//! ClienteRepository - Repository per la gestione dei clienti

use super::{Create, Read, ReadAll};
use crate::dtos::CreateClienteDTO;
use crate::entities::{Cliente, Perfil};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

pub struct ClienteRepository {
    connection_pool: SqlitePool,
}

impl ClienteRepository {
    pub fn new(connection_pool: SqlitePool) -> ClienteRepository {
        Self { connection_pool }
    }

    /// l'email è univoca, serve come username per il login
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Cliente>, Error> {
        debug!("Finding cliente by email");
        let cliente = sqlx::query_as::<_, Cliente>(
            "SELECT id, nome, email, cpf_ou_cnpj, tipo, senha FROM cliente WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.connection_pool)
        .await?;

        match cliente {
            Some(c) => Ok(Some(self.with_perfis(c).await?)),
            None => Ok(None),
        }
    }

    async fn with_perfis(&self, mut cliente: Cliente) -> Result<Cliente, Error> {
        let codes: Vec<i32> = sqlx::query_scalar::<_, i32>("SELECT perfil FROM perfis WHERE cliente_id = ? ORDER BY perfil")
            .bind(cliente.id)
            .fetch_all(&self.connection_pool)
            .await?;
        cliente.perfis = codes
            .into_iter()
            .filter_map(|cod| Perfil::to_enum(Some(cod)))
            .collect();
        Ok(cliente)
    }
}

impl Create<Cliente, CreateClienteDTO> for ClienteRepository {
    /// `data.senha` deve essere già l'hash bcrypt. Ogni nuovo cliente riceve il perfil CLIENTE.
    #[instrument(skip(self, data), fields(email = %data.email))]
    async fn create(&self, data: &CreateClienteDTO) -> Result<Cliente, Error> {
        debug!("Creating new cliente");
        let mut tx = self.connection_pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO cliente (nome, email, cpf_ou_cnpj, tipo, senha) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&data.nome)
        .bind(&data.email)
        .bind(&data.cpf_ou_cnpj)
        .bind(data.tipo)
        .bind(&data.senha)
        .execute(&mut *tx)
        .await?;
        let new_id = result.last_insert_rowid() as i32;

        sqlx::query("INSERT INTO perfis (cliente_id, perfil) VALUES (?, ?)")
            .bind(new_id)
            .bind(Perfil::Cliente.cod())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        info!("Cliente created with id {}", new_id);

        Ok(Cliente {
            id: new_id,
            nome: data.nome.clone(),
            email: data.email.clone(),
            cpf_ou_cnpj: data.cpf_ou_cnpj.clone(),
            tipo: Some(data.tipo),
            senha: data.senha.clone(),
            perfis: vec![Perfil::Cliente],
        })
    }
}

impl Read<Cliente, i32> for ClienteRepository {
    #[instrument(skip(self), fields(cliente_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Cliente>, Error> {
        debug!("Reading cliente by id");
        let cliente = sqlx::query_as::<_, Cliente>(
            "SELECT id, nome, email, cpf_ou_cnpj, tipo, senha FROM cliente WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        match cliente {
            Some(c) => Ok(Some(self.with_perfis(c).await?)),
            None => Ok(None),
        }
    }
}

impl ReadAll<Cliente> for ClienteRepository {
    /// I perfis non vengono caricati: la lista serve solo per la visualizzazione
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Cliente>, Error> {
        debug!("Reading all clientes");
        sqlx::query_as::<_, Cliente>("SELECT id, nome, email, cpf_ou_cnpj, tipo, senha FROM cliente ORDER BY id")
            .fetch_all(&self.connection_pool)
            .await
    }
}
