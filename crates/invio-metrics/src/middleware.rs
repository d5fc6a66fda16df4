use std::{future::Future, pin::Pin, sync::Arc, task::Poll};

use axum::{body::Body, extract::MatchedPath, response::Response};
use bytes::Bytes;
use http::Request;
use http_body::{Body as HttpBody, Frame, SizeHint};
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::{collectors::HttpMetrics, timer::RequestTimer};

const CLIENT_CLOSED_REQUEST: u16 = 499;

#[derive(Clone)]
pub struct MetricsLayer {
    metrics: Arc<HttpMetrics>,
}

impl MetricsLayer {
    pub fn new(metrics: Arc<HttpMetrics>) -> Self {
        Self { metrics }
    }
}

impl<S> Layer<S> for MetricsLayer {
    type Service = MetricsMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MetricsMiddleware {
            inner,
            metrics: Arc::clone(&self.metrics),
        }
    }
}

#[derive(Clone)]
pub struct MetricsMiddleware<S> {
    inner: S,
    metrics: Arc<HttpMetrics>,
}

impl<S, ReqBody> Service<Request<ReqBody>> for MetricsMiddleware<S>
where
    S: Service<Request<ReqBody>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ReqBody: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let mut inner = self.inner.clone();

        let method = req.method().as_str().to_string();
        let route = req
            .extensions()
            .get::<MatchedPath>()
            .map(|matched| matched.as_str().to_string())
            .unwrap_or_else(|| req.uri().path().to_string());
        let mut recorder = RequestRecorder::begin(Arc::clone(&self.metrics), method, route);

        Box::pin(async move {
            let response = inner.call(req).await?;
            recorder.set_status(response.status().as_u16());

            Ok(response.map(|body| {
                Body::new(InstrumentedBody {
                    inner: body,
                    recorder,
                })
            }))
        })
    }
}

struct RequestRecorder {
    metrics: Arc<HttpMetrics>,
    timer: RequestTimer,
    method: String,
    route: String,
    status: Option<u16>,
}

impl RequestRecorder {
    fn begin(metrics: Arc<HttpMetrics>, method: String, route: String) -> Self {
        metrics.connection_opened();
        Self {
            metrics,
            timer: RequestTimer::start(),
            method,
            route,
            status: None,
        }
    }

    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }
}

impl Drop for RequestRecorder {
    fn drop(&mut self) {
        let status = self.status.unwrap_or(CLIENT_CLOSED_REQUEST);
        self.metrics
            .record_request(&self.method, &self.route, status, self.timer.elapsed_seconds());
        self.metrics.connection_closed();
    }
}

pin_project! {
    struct InstrumentedBody {
        #[pin]
        inner: Body,
        recorder: RequestRecorder,
    }
}

impl HttpBody for InstrumentedBody {
    type Data = Bytes;
    type Error = axum::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        self.project().inner.poll_frame(cx)
    }

    fn is_end_stream(&self) -> bool {
        self.inner.is_end_stream()
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}
