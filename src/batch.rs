//! Running edits over many shapes.
//!
//! A batch processes shapes one after another. What happens when one of them fails is decided up
//! front by a [FailurePolicy] instead of by whichever error happens to escape.

use std::fmt::Display;

use shapedoc::{
    codec::{Compressor, ShapeCodec, Uncompressed},
    MeshGraph,
};

use crate::Error;

/// What a [Batch] does after a shape fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// Stop at the first failure.
    #[default]
    Abort,
    /// Record the failure and go on with the next shape.
    SkipAndContinue,
}

/// Outcome of a [Batch] run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Shapes processed successfully, in processing order.
    pub completed: Vec<String>,
    /// Shapes skipped under [FailurePolicy::SkipAndContinue], with the reason.
    pub failed: Vec<(String, Error)>,
}

impl BatchReport {
    /// Whether every shape was processed.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Batch {
    policy: FailurePolicy,
}

impl Batch {
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    #[inline]
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Feed each job to `process`, in order.
    ///
    /// # Errors
    ///
    /// * [Error::BatchAborted] wrapping the first failure, under [FailurePolicy::Abort]
    #[tracing::instrument(level = "debug", skip_all, fields(policy = ?self.policy))]
    pub fn run<K: Display, T>(
        &self,
        jobs: impl IntoIterator<Item = (K, T)>,
        mut process: impl FnMut(&K, T) -> Result<(), Error>,
    ) -> Result<BatchReport, Error> {
        let mut report = BatchReport::default();
        for (key, job) in jobs {
            match process(&key, job) {
                Ok(()) => {
                    tracing::debug!(shape = %key, "processed shape");
                    report.completed.push(key.to_string());
                }
                Err(e) => match self.policy {
                    FailurePolicy::Abort => {
                        tracing::error!(shape = %key, error = %e, "aborting batch");
                        return Err(Error::BatchAborted {
                            shape: key.to_string(),
                            source: Box::new(e),
                        });
                    }
                    FailurePolicy::SkipAndContinue => {
                        tracing::warn!(shape = %key, error = %e, "skipping shape");
                        report.failed.push((key.to_string(), e));
                    }
                },
            }
        }
        Ok(report)
    }
}

/// Stored bytes in, stored bytes out: decompress, decode, edit, encode, compress.
#[derive(Debug, Clone, Default)]
pub struct ShapePipeline<C, Z = Uncompressed> {
    codec: C,
    compressor: Z,
}

impl<C: ShapeCodec> ShapePipeline<C, Uncompressed> {
    /// A pipeline for shapes stored uncompressed.
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            compressor: Uncompressed,
        }
    }
}

impl<C: ShapeCodec, Z: Compressor> ShapePipeline<C, Z> {
    pub fn with_compressor(codec: C, compressor: Z) -> Self {
        Self { codec, compressor }
    }

    #[inline]
    pub fn codec(&self) -> &C {
        &self.codec
    }

    #[inline]
    pub fn compressor(&self) -> &Z {
        &self.compressor
    }

    /// Turn stored bytes into a graph.
    pub fn load(&self, stored: &[u8]) -> Result<MeshGraph, Error> {
        let raw = self
            .compressor
            .decompress(stored)
            .map_err(|e| Error::Compressor(Box::new(e)))?;
        self.codec
            .decode(&raw)
            .map_err(|e| Error::Codec(Box::new(e)))
    }

    /// Turn a graph into stored bytes.
    pub fn store(&self, graph: &MeshGraph) -> Result<Vec<u8>, Error> {
        let raw = self
            .codec
            .encode(graph)
            .map_err(|e| Error::Codec(Box::new(e)))?;
        self.compressor
            .compress(&raw)
            .map_err(|e| Error::Compressor(Box::new(e)))
    }

    /// [load](Self::load), `edit`, then [store](Self::store). Nothing is stored if any step fails.
    pub fn convert(
        &self,
        stored: &[u8],
        edit: impl FnOnce(&mut MeshGraph) -> Result<(), Error>,
    ) -> Result<Vec<u8>, Error> {
        let mut graph = self.load(stored)?;
        edit(&mut graph)?;
        self.store(&graph)
    }
}
