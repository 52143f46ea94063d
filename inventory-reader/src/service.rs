//! 库存读取服务模块

use std::io::Write;

use futures::TryStreamExt;

use common::errors::AppResult;
use common::models::ReadReport;
use common::utils::DocumentFormatter;

use crate::source::DocumentSource;

/// Reads every document of a source and prints it.
pub struct InventoryService<S> {
    source: S,
}

impl<S: DocumentSource> InventoryService<S> {
    /// Creates a new inventory service over a document source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Writes every document to `out`, one line each, in retrieval order.
    ///
    /// Each line is flushed as soon as it is written; on failure the lines
    /// already written stay written and the error is returned unchanged.
    pub async fn read_all<W: Write>(&self, out: &mut W, run_id: &str) -> AppResult<ReadReport> {
        let mut report = ReadReport::begin(
            run_id,
            self.source.database(),
            self.source.collection(),
        );
        tracing::debug!(run_id, collection = %report.collection, "开始读取集合");

        let mut documents = self.source.find_all().await?;
        while let Some(doc) = documents.try_next().await? {
            DocumentFormatter::write_line(out, &doc)?;
            out.flush()?;
            report.documents += 1;
        }

        let report = report.finish();
        tracing::info!(
            run_id,
            database = %report.database,
            collection = %report.collection,
            documents = report.documents,
            duration_ms = report.duration_ms,
            "集合读取完成"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bson::{doc, Document};
    use common::errors::AppError;
    use futures::stream::{self, StreamExt};

    use crate::source::DocumentStream;

    struct MemorySource {
        items: std::sync::Mutex<Option<Vec<AppResult<Document>>>>,
    }

    impl MemorySource {
        fn new(items: Vec<AppResult<Document>>) -> Self {
            Self {
                items: std::sync::Mutex::new(Some(items)),
            }
        }

        fn documents(docs: Vec<Document>) -> Self {
            Self::new(docs.into_iter().map(Ok).collect())
        }
    }

    #[async_trait]
    impl DocumentSource for MemorySource {
        fn database(&self) -> &str {
            "ePortfolio"
        }

        fn collection(&self) -> &str {
            "inventory"
        }

        async fn find_all(&self) -> AppResult<DocumentStream> {
            let items = self.items.lock().unwrap().take().unwrap_or_default();
            Ok(stream::iter(items).boxed())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl DocumentSource for FailingSource {
        fn database(&self) -> &str {
            "ePortfolio"
        }

        fn collection(&self) -> &str {
            "inventory"
        }

        async fn find_all(&self) -> AppResult<DocumentStream> {
            Err(AppError::Authentication("bad auth".into()))
        }
    }

    fn lines(out: &[u8]) -> Vec<String> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[tokio::test]
    async fn test_empty_collection_prints_nothing() {
        let service = InventoryService::new(MemorySource::documents(vec![]));
        let mut out = Vec::new();

        let report = service.read_all(&mut out, "run00001").await.unwrap();

        assert!(out.is_empty());
        assert_eq!(report.documents, 0);
    }

    #[tokio::test]
    async fn test_prints_each_document_in_order() {
        let service = InventoryService::new(MemorySource::documents(vec![
            doc! { "_id": 1, "item": "pen", "qty": 10 },
            doc! { "_id": 2, "item": "notebook", "qty": 3 },
        ]));
        let mut out = Vec::new();

        let report = service.read_all(&mut out, "run00002").await.unwrap();

        let printed = lines(&out);
        assert_eq!(printed.len(), 2);
        assert!(printed[0].contains(r#""item": "pen""#));
        assert!(printed[1].contains(r#""item": "notebook""#));
        assert_eq!(report.documents, 2);
        assert_eq!(report.run_id, "run00002");
        assert_eq!(report.collection, "inventory");
    }

    #[tokio::test]
    async fn test_one_line_per_document() {
        let docs: Vec<Document> = (0..25i32)
            .map(|i| doc! { "_id": i, "item": format!("item-{i}") })
            .collect();
        let service = InventoryService::new(MemorySource::documents(docs.clone()));
        let mut out = Vec::new();

        service.read_all(&mut out, "run00003").await.unwrap();

        let printed = lines(&out);
        assert_eq!(printed.len(), docs.len());
        for (line, doc) in printed.iter().zip(&docs) {
            let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(parsed["_id"], doc.get_i32("_id").unwrap());
            assert_eq!(parsed["item"], doc.get_str("item").unwrap());
        }
    }

    #[tokio::test]
    async fn test_mid_scan_failure_keeps_printed_lines() {
        let service = InventoryService::new(MemorySource::new(vec![
            Ok(doc! { "_id": 1, "item": "pen" }),
            Err(AppError::Query("connection dropped".into())),
            Ok(doc! { "_id": 2, "item": "notebook" }),
        ]));
        let mut out = Vec::new();

        let err = service.read_all(&mut out, "run00004").await.unwrap_err();

        assert!(matches!(err, AppError::Query(_)));
        let printed = lines(&out);
        assert_eq!(printed, vec![r#"{"_id": 1, "item": "pen"}"#.to_string()]);
    }

    #[tokio::test]
    async fn test_find_failure_prints_nothing() {
        let service = InventoryService::new(FailingSource);
        let mut out = Vec::new();

        let err = service.read_all(&mut out, "run00005").await.unwrap_err();

        assert!(matches!(err, AppError::Authentication(_)));
        assert!(out.is_empty());
    }
}
