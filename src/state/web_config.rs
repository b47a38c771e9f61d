//! Site branding form of the backoffice.

use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    model::{
        storage::{logo_object_path, UploadDto, IMAGE_BUCKET},
        web_config::{WebConfig, WebConfigEntryDto},
    },
    state::{
        collection::{ClientError, CollectionClient},
        list::LoadState,
        StatusMessage,
    },
};

pub const CONFIG_LOAD_ERROR: &str = "Error al cargar la configuración";
pub const CONFIG_SAVED: &str = "Configuración actualizada con éxito.";
pub const CONFIG_SAVE_ERROR: &str = "Error al actualizar la configuración";
pub const LOGO_UPLOADED: &str = "Logo subido con éxito.";
pub const LOGO_UPLOAD_ERROR: &str = "Error al subir el logo";

/// Loads the site configuration, falling back to defaults when the fetch fails
pub async fn fetch_web_config<C: CollectionClient>(client: &C) -> WebConfig {
    match client.select_config().await {
        Ok(entries) => WebConfig::from_entries(&entries),
        Err(err) => {
            tracing::error!("Error fetching web config: {}", err);
            WebConfig::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WebConfigForm {
    pub config: WebConfig,
    load_state: LoadState,
    status: Option<StatusMessage>,
    uploading: bool,
}

impl WebConfigForm {
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub async fn load<C: CollectionClient>(&mut self, client: &C) {
        self.load_state = LoadState::Loading;

        let result = client.select_config().await;
        self.apply_loaded(result);
    }

    pub fn apply_loaded(&mut self, result: Result<Vec<WebConfigEntryDto>, ClientError>) {
        match result {
            Ok(entries) => {
                self.config = WebConfig::from_entries(&entries);
                self.load_state = LoadState::Loaded;
            }
            Err(err) => {
                tracing::error!("{}: {}", CONFIG_LOAD_ERROR, err);

                self.load_state = LoadState::Errored(format!("{}: {}", CONFIG_LOAD_ERROR, err));
            }
        }
    }

    /// Upserts every key, returning `true` when listeners should reload the configuration
    pub async fn save<C: CollectionClient>(&mut self, client: &C) -> bool {
        let entries = self.begin_save();

        let result = client.upsert_config(&entries).await;
        self.apply_saved(result)
    }

    /// Clears the banner and returns the entries to upsert
    pub fn begin_save(&mut self) -> Vec<WebConfigEntryDto> {
        self.status = None;
        self.config.to_entries()
    }

    pub fn apply_saved(&mut self, result: Result<Vec<WebConfigEntryDto>, ClientError>) -> bool {
        match result {
            Ok(_) => {
                self.status = Some(StatusMessage::success(CONFIG_SAVED));
                true
            }
            Err(err) => {
                tracing::error!("{}: {}", CONFIG_SAVE_ERROR, err);

                self.status = Some(StatusMessage::error(format!(
                    "{}: {}",
                    CONFIG_SAVE_ERROR, err
                )));
                false
            }
        }
    }

    /// Uploads a logo and points the form at its public URL, the change is kept until saved
    pub async fn upload_logo<C: CollectionClient>(
        &mut self,
        client: &C,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> bool {
        self.begin_upload();

        let result = Self::send_logo(client, file_name, bytes).await;
        self.apply_logo(result)
    }

    pub fn begin_upload(&mut self) {
        self.status = None;
        self.uploading = true;
    }

    pub async fn send_logo<C: CollectionClient>(
        client: &C,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadDto, ClientError> {
        let path = logo_object_path(file_name, Utc::now().timestamp_millis());

        client.upload(IMAGE_BUCKET, &path, bytes).await
    }

    pub fn apply_logo(&mut self, result: Result<UploadDto, ClientError>) -> bool {
        self.uploading = false;

        match result {
            Ok(upload) => {
                self.config.logo.url = upload.public_url;
                self.status = Some(StatusMessage::success(LOGO_UPLOADED));
                true
            }
            Err(err) => {
                tracing::error!("{}: {}", LOGO_UPLOAD_ERROR, err);

                self.status = Some(StatusMessage::error(format!(
                    "{}: {}",
                    LOGO_UPLOAD_ERROR, err
                )));
                false
            }
        }
    }
}
