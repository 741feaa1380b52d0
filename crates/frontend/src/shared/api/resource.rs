use contracts::shared::table::{TableParams, TableResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{api_base, ApiError};
use crate::system::auth::context::AuthContext;

/// Encode list parameters as the query string of a collection endpoint
///
/// Filters use the bracket notation understood by the API:
/// `filters[0][field]=status&filters[0][operator]=equals&filters[0][value]=active`.
pub fn encode_query(params: &TableParams) -> Result<String, ApiError> {
    serde_qs::to_string(params).map_err(|e| ApiError::Encode(e.to_string()))
}

/// CRUD client for one REST collection, e.g. `/api/brokers`
#[derive(Clone, Copy)]
pub struct RestResource {
    path: &'static str,
    auth: AuthContext,
    port: u16,
}

impl RestResource {
    pub fn new(path: &'static str, auth: AuthContext, port: u16) -> Self {
        Self { path, auth, port }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    fn collection_url(&self) -> String {
        format!("{}{}", api_base(self.port), self.path)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id))
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.auth.get_token().ok_or(ApiError::Unauthorized)?;
        Ok(builder.header("Authorization", &format!("Bearer {}", token)))
    }

    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &body);
        if err == ApiError::Unauthorized {
            log::warn!("{} rejected the session token, logging out", self.path);
            self.auth.logout();
        }
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetch one page of the collection
    pub async fn list<T: DeserializeOwned>(
        &self,
        params: TableParams,
    ) -> Result<TableResponse<T>, ApiError> {
        let query = encode_query(&params)?;
        let url = if query.is_empty() {
            self.collection_url()
        } else {
            format!("{}?{}", self.collection_url(), query)
        };
        log::debug!("GET {}", url);

        let request = self
            .authorized(Request::get(&url))?
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    pub async fn create<B: Serialize, T: DeserializeOwned>(&self, body: &B) -> Result<T, ApiError> {
        let request = self
            .authorized(Request::post(&self.collection_url()))?
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    pub async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorized(Request::put(&self.item_url(id)))?
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let request = self
            .authorized(Request::delete(&self.item_url(id)))?
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table::{SortOrder, TableFilter};

    #[test]
    fn test_first_page_query_has_no_cursor() {
        let query = encode_query(&TableParams::first_page(20)).unwrap();
        assert_eq!(query, "limit=20");
    }

    #[test]
    fn test_query_carries_sort_search_and_filters() {
        let mut params = TableParams::first_page(10);
        params.cursor = Some("c1".into());
        params.sort_by = Some("name".into());
        params.sort_order = Some(SortOrder::Desc);
        params.search = Some("acme".into());
        params.filters = vec![
            TableFilter::equals("status", "active"),
            TableFilter::equals("status", "pending"),
        ];

        let query = encode_query(&params).unwrap();
        assert!(query.contains("cursor=c1"));
        assert!(query.contains("limit=10"));
        assert!(query.contains("sortBy=name"));
        assert!(query.contains("sortOrder=desc"));
        assert!(query.contains("search=acme"));
        assert!(query.contains("active"));
        assert!(query.contains("pending"));
    }
}
