//! Generic list and form controller behind every backoffice management screen.
//!
//! A [`ListController`] treats the remote collection as the only source of truth. The list is
//! replaced wholesale by [`ListController::load`] and afterwards only patched with the single
//! row each mutation returns, so it never holds two rows with the same ID.

use chrono::Utc;
use dioxus_logger::tracing;
use serde::Serialize;

use crate::{
    model::storage::{image_object_path, UploadDto, IMAGE_BUCKET},
    state::{
        collection::{ClientError, ListQuery, Record, RemoteClient},
        StatusMessage,
    },
};

/// Spanish texts shown by a management screen
#[derive(Debug)]
pub struct ListTexts {
    pub load_error: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub save_error: &'static str,
    pub delete_error: &'static str,
    pub confirm_delete: &'static str,
}

pub const MISSING_FIELDS: &str = "Por favor, completa todos los campos obligatorios.";
pub const IMAGE_UPLOADED: &str = "Imagen subida con éxito.";
pub const IMAGE_UPLOAD_ERROR: &str = "Error al subir la imagen";

/// Editable copy of a record
#[allow(async_fn_in_trait)]
pub trait Draft: Default + Clone + PartialEq + 'static {
    type Record: Record;
    type Input: Serialize;

    const TEXTS: &'static ListTexts;

    fn from_record(record: &Self::Record) -> Self;

    /// Checks required fields and converts the draft into a payload
    fn validate(&self, editing: bool) -> Result<Self::Input, String>;

    fn set_image_url(&mut self, _url: String) {}

    async fn insert<C: RemoteClient>(
        client: &C,
        input: &Self::Input,
    ) -> Result<Self::Record, ClientError> {
        client.insert::<Self::Record, _>(input).await
    }

    async fn update<C: RemoteClient>(
        client: &C,
        id: &<Self::Record as Record>::Id,
        input: &Self::Input,
    ) -> Result<Self::Record, ClientError> {
        client.update::<Self::Record, _>(id, input).await
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored(String),
}

/// A validated draft on its way to the remote collection
pub struct Submission<D: Draft> {
    editing: Option<<D::Record as Record>::Id>,
    input: D::Input,
}

impl<D: Draft> Submission<D> {
    /// Updates the edited row, or inserts a new one
    pub async fn send<C: RemoteClient>(&self, client: &C) -> Result<D::Record, ClientError> {
        match &self.editing {
            Some(id) => D::update(client, id, &self.input).await,
            None => D::insert(client, &self.input).await,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ListController<D: Draft> {
    items: Vec<D::Record>,
    /// Form state, bound directly to the inputs
    pub draft: D,
    editing: Option<<D::Record as Record>::Id>,
    status: Option<StatusMessage>,
    load_state: LoadState,
    query: ListQuery,
}

impl<D: Draft> Default for ListController<D> {
    fn default() -> Self {
        Self::new(ListQuery::default())
    }
}

impl<D: Draft> ListController<D> {
    pub fn new(query: ListQuery) -> Self {
        Self {
            items: Vec::new(),
            draft: D::default(),
            editing: None,
            status: None,
            load_state: LoadState::Idle,
            query,
        }
    }

    pub fn items(&self) -> &[D::Record] {
        &self.items
    }

    pub fn editing(&self) -> Option<&<D::Record as Record>::Id> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Rows whose search key contains `search`, case-insensitively
    pub fn visible(&self, search: &str) -> Vec<&D::Record> {
        let needle = search.trim().to_lowercase();

        self.items
            .iter()
            .filter(|record| {
                needle.is_empty()
                    || record
                        .search_key()
                        .is_none_or(|key| key.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Replaces the list with every row of the collection
    pub async fn load<C: RemoteClient>(&mut self, client: &C) {
        let query = self.begin_load();
        let result = Self::fetch(client, query).await;
        self.apply_loaded(result);
    }

    /// Marks the list as loading and returns the query to fetch with
    pub fn begin_load(&mut self) -> ListQuery {
        self.load_state = LoadState::Loading;
        self.query
    }

    pub async fn fetch<C: RemoteClient>(
        client: &C,
        query: ListQuery,
    ) -> Result<Vec<D::Record>, ClientError> {
        client.select::<D::Record>(query).await
    }

    pub fn apply_loaded(&mut self, result: Result<Vec<D::Record>, ClientError>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.load_state = LoadState::Loaded;
            }
            Err(err) => {
                tracing::error!("{}: {}", D::TEXTS.load_error, err);

                self.items.clear();
                self.load_state = LoadState::Errored(format!("{}: {}", D::TEXTS.load_error, err));
            }
        }
    }

    pub fn begin_edit(&mut self, record: &D::Record) {
        self.draft = D::from_record(record);
        self.editing = Some(record.id());
        self.status = None;
    }

    pub fn begin_create(&mut self) {
        self.reset_form();
        self.status = None;
    }

    pub fn cancel_edit(&mut self) {
        self.begin_create();
    }

    /// Validates the draft then updates the edited row or inserts a new one.
    ///
    /// Returns `true` when the mutation succeeded.
    pub async fn submit<C: RemoteClient>(&mut self, client: &C) -> bool {
        let Some(submission) = self.prepare_submit() else {
            return false;
        };

        let result = submission.send(client).await;
        self.apply_submitted(&submission, result)
    }

    /// Validates the draft, `None` when required fields are missing
    pub fn prepare_submit(&mut self) -> Option<Submission<D>> {
        self.status = None;

        match self.draft.validate(self.editing.is_some()) {
            Ok(input) => Some(Submission {
                editing: self.editing.clone(),
                input,
            }),
            Err(message) => {
                self.status = Some(StatusMessage::error(message));
                None
            }
        }
    }

    /// Patches the list with the row a submission returned.
    ///
    /// The form is only reset when it still shows the submitted record.
    pub fn apply_submitted(
        &mut self,
        submission: &Submission<D>,
        result: Result<D::Record, ClientError>,
    ) -> bool {
        match result {
            Ok(record) => {
                if submission.editing.is_some() {
                    self.apply_updated(record);
                    self.status = Some(StatusMessage::success(D::TEXTS.updated));
                } else {
                    self.apply_inserted(record);
                    self.status = Some(StatusMessage::success(D::TEXTS.created));
                }

                if self.editing == submission.editing {
                    self.reset_form();
                }
                true
            }
            Err(err) => {
                tracing::error!("{}: {}", D::TEXTS.save_error, err);

                self.status = Some(StatusMessage::error(format!(
                    "{}: {}",
                    D::TEXTS.save_error,
                    err
                )));
                false
            }
        }
    }

    /// Deletes the row with `id` once the caller's confirmation prompt was accepted
    pub async fn remove<C: RemoteClient>(
        &mut self,
        client: &C,
        id: &<D::Record as Record>::Id,
        confirmed: bool,
    ) -> bool {
        if !confirmed {
            return false;
        }

        let result = Self::delete(client, id).await;
        self.apply_removed(id, result)
    }

    pub async fn delete<C: RemoteClient>(
        client: &C,
        id: &<D::Record as Record>::Id,
    ) -> Result<(), ClientError> {
        client.delete::<D::Record>(id).await
    }

    /// Filters exactly `id` out of the list once its deletion succeeded
    pub fn apply_removed(
        &mut self,
        id: &<D::Record as Record>::Id,
        result: Result<(), ClientError>,
    ) -> bool {
        match result {
            Ok(()) => {
                self.items.retain(|record| record.id() != *id);
                if self.editing.as_ref() == Some(id) {
                    self.reset_form();
                }

                self.status = Some(StatusMessage::success(D::TEXTS.deleted));
                true
            }
            Err(err) => {
                tracing::error!("{}: {}", D::TEXTS.delete_error, err);

                self.status = Some(StatusMessage::error(format!(
                    "{}: {}",
                    D::TEXTS.delete_error,
                    err
                )));
                false
            }
        }
    }

    /// Uploads an image to the shared bucket and copies its public URL into the draft
    pub async fn upload_image<C: RemoteClient>(
        &mut self,
        client: &C,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> bool {
        self.status = None;

        let result = Self::upload(client, file_name, bytes).await;
        self.apply_uploaded(result)
    }

    pub async fn upload<C: RemoteClient>(
        client: &C,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadDto, ClientError> {
        let path = image_object_path(file_name, Utc::now().timestamp_millis());

        client.upload(IMAGE_BUCKET, &path, bytes).await
    }

    /// Points the current draft at an uploaded image, leaving its other fields untouched
    pub fn apply_uploaded(&mut self, result: Result<UploadDto, ClientError>) -> bool {
        match result {
            Ok(upload) => {
                self.draft.set_image_url(upload.public_url);
                self.status = Some(StatusMessage::success(IMAGE_UPLOADED));
                true
            }
            Err(err) => {
                tracing::error!("{}: {}", IMAGE_UPLOAD_ERROR, err);

                self.status = Some(StatusMessage::error(format!(
                    "{}: {}",
                    IMAGE_UPLOAD_ERROR, err
                )));
                false
            }
        }
    }

    fn apply_inserted(&mut self, record: D::Record) {
        let id = record.id();
        self.items.retain(|existing| existing.id() != id);
        self.items.insert(0, record);
    }

    fn apply_updated(&mut self, record: D::Record) {
        let id = record.id();
        match self.items.iter().position(|existing| existing.id() == id) {
            Some(index) => {
                self.items[index] = record;

                let mut seen = false;
                self.items.retain(|existing| {
                    if existing.id() != id {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.items.insert(0, record),
        }
    }

    fn reset_form(&mut self) {
        self.draft = D::default();
        self.editing = None;
    }
}
