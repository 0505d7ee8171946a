//! Multipart form reading shared by the upload endpoints.

use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Bytes,
}

/// All parts of a multipart request, split into files and text fields.
#[derive(Debug, Default)]
pub struct UploadForm {
    files: HashMap<String, UploadedFile>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            match field.file_name().map(str::to_string) {
                Some(filename) => {
                    let bytes = field.bytes().await?;
                    form.files.insert(name, UploadedFile { filename, bytes });
                }
                None => {
                    let value = field.text().await?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
