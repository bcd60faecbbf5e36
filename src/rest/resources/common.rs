//! Request helpers shared by the resource services.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{Client, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError, Params};
use crate::rest::{ListResource, Page, PageEnvelope, PageIterator, ResourcePath};

pub(crate) fn request(
    client: &Client,
    method: HttpMethod,
    path: &ResourcePath,
    params: Params,
) -> Result<HttpRequest, InvalidHttpRequestError> {
    HttpRequest::builder(method, path.target(client.account_sid()))
        .params(params)
        .build()
}

/// `GET` an instance.
pub(crate) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    path: &ResourcePath,
    params: Params,
) -> Result<T, HttpError> {
    client
        .execute(request(client, HttpMethod::Get, path, params)?)
        .await
}

/// `POST` a create or update.
pub(crate) async fn submit<T, P>(
    client: &Client,
    path: &ResourcePath,
    params: &P,
) -> Result<T, HttpError>
where
    T: DeserializeOwned,
    P: Serialize + ?Sized,
{
    let params = Params::from_serialize(params)?;
    client
        .execute(request(client, HttpMethod::Post, path, params)?)
        .await
}

/// `DELETE` an instance.
pub(crate) async fn remove(client: &Client, path: &ResourcePath) -> Result<(), HttpError> {
    client
        .execute_no_content(request(client, HttpMethod::Delete, path, Params::new())?)
        .await
}

/// `GET` a single page of a collection.
pub(crate) async fn fetch_page<R, P>(
    client: &Client,
    path: &ResourcePath,
    params: &P,
) -> Result<Page<R>, HttpError>
where
    R: ListResource,
    P: Serialize + ?Sized,
{
    let params = Params::from_serialize(params)?;
    let envelope: R::Envelope = client
        .execute(request(client, HttpMethod::Get, path, params)?)
        .await?;
    Ok(envelope.into_page())
}

/// Creates an iterator over a collection.
pub(crate) fn iterate<'c, R, P>(
    client: &'c Client,
    path: &ResourcePath,
    params: &P,
) -> Result<PageIterator<'c, R>, InvalidHttpRequestError>
where
    R: ListResource,
    P: Serialize + ?Sized,
{
    let params = Params::from_serialize(params)?;
    Ok(PageIterator::new(
        client,
        path.product(),
        path.build(client.account_sid()),
        params,
    ))
}
