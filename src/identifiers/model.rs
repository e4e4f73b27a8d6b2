/*! fastText language identification model.
* !*/
use std::path::Path;

use fasttext::FastText as FastTextLib;
use log::error;

use crate::error::Error;
use crate::metadata::Instance;

use super::{Identification, Identify};

/// fastText model predicting the top-1 language of a text.
pub struct FastText {
    inner: FastTextLib,
    pub threshold: f32,
}

impl FastText {
    pub fn predict_one(&self, text: &str) -> Result<Option<Identification>, Error> {
        // the model predicts one line at a time
        let line = text.replace(['\n', '\r'], " ");
        let pred = self
            .inner
            .predict(&line, 1, self.threshold)
            .map_err(Error::FastText)?;

        match pred.into_iter().next() {
            None => Ok(None),
            Some(pred) => match Identification::try_from(pred) {
                Ok(id) => Ok(Some(id)),
                Err(e) => {
                    error!("Couldn't find a proper label: {e:?}");
                    Err(e.into())
                }
            },
        }
    }
}

impl Identify for FastText {
    fn identify(&self, instance: &Instance) -> Result<Option<Identification>, Error> {
        match instance.value.as_deref() {
            Some(text) => self.predict_one(text),
            None => Ok(None),
        }
    }
}

/// Fasttext builder.
pub struct FastTextBuilder<'a> {
    path: Option<&'a Path>,
    threshold: Option<f32>,
}

impl<'a> FastTextBuilder<'a> {
    fn init_fasttextlib(path: &str) -> Result<FastTextLib, Error> {
        let mut ft = FastTextLib::new();
        ft.load_model(path).map_err(Error::FastText)?;
        Ok(ft)
    }

    pub fn build(&self) -> Result<FastText, Error> {
        let path = self
            .path
            .ok_or_else(|| Error::Custom("No path provided".to_string()))?;
        let threshold = self
            .threshold
            .ok_or_else(|| Error::Custom("No threshold provided".to_string()))?;
        if !path.is_file() {
            return Err(Error::FastText(format!("model not found: {:?}", path)));
        }
        let path = path
            .to_str()
            .ok_or_else(|| Error::Custom("Couldn't parse path".to_string()))?;

        Ok(FastText {
            inner: Self::init_fasttextlib(path)?,
            threshold,
        })
    }

    pub fn path<'b>(&'b mut self, path: &'a Path) -> &'b mut FastTextBuilder<'a> {
        self.path = Some(path);
        self
    }

    pub fn threshold<'b>(&'b mut self, threshold: f32) -> &'b mut FastTextBuilder<'a> {
        self.threshold = Some(threshold);
        self
    }
}

impl<'a> Default for FastTextBuilder<'a> {
    fn default() -> Self {
        Self {
            path: Some(Path::new("lid.176.bin")),
            threshold: Some(0.8),
        }
    }
}
