use std::env;
use std::sync::OnceLock;
use mongodb::{
    bson::doc,
    options::IndexOptions,
    Client,
    Database,
    IndexModel,
};
use crate::model::Poll;

static CLIENT: OnceLock<Client> = OnceLock::new();

pub struct MongoDB;

impl MongoDB {
    /// Connects the process-wide client and creates the indexes the
    /// service relies on. Must complete before the server accepts traffic.
    pub async fn init(&self) -> mongodb::error::Result<()> {
        let uri = env::var("MONGO_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let client = Client::with_uri_str(&uri).await?;
        CLIENT.set(client).ok();

        self.ensure_indexes().await
    }

    pub fn connect(&self) -> Database {
        let name = env::var("MONGO_DATABASE")
            .unwrap_or_else(|_| "gatherly".to_string());

        CLIENT
            .get()
            .expect("MongoDB.init must run before connect")
            .database(&name)
    }

    // One vote per (question, user): the insert itself is the enforcement
    // point, not the handler's pre-read.
    async fn ensure_indexes(&self) -> mongodb::error::Result<()> {
        let db = self.connect();

        let index = IndexModel::builder()
            .keys(doc! { "question": 1, "user": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        db.collection::<Poll::Vote>("votes").create_index(index).await?;

        Ok(())
    }
}
