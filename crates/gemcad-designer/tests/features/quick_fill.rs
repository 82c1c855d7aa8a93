use async_trait::async_trait;
use gemcad_core::PackingError;
use gemcad_designer::{
    run_fill, DesignerState, FillRequest, FillResponse, HttpPackingService, LocalPackingService,
    PackingResult, PackingService, Point, QuickFillOutcome, Region,
};
use gemcad_settings::Config;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Answers after a delay, like a slow remote service.
struct SlowService {
    delay: Duration,
}

#[async_trait]
impl PackingService for SlowService {
    async fn fill(&self, request: &FillRequest) -> Result<PackingResult, PackingError> {
        tokio::time::sleep(self.delay).await;
        LocalPackingService::new().fill(request).await
    }

    fn name(&self) -> &str {
        "slow"
    }
}

/// Always fails, like an unreachable service.
struct FailingService;

#[async_trait]
impl PackingService for FailingService {
    async fn fill(&self, _request: &FillRequest) -> Result<PackingResult, PackingError> {
        Err(PackingError::request_failed("connection refused"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

#[tokio::test]
async fn test_completion_for_cancelled_job_is_discarded() {
    let mut state = DesignerState::new();
    let ticket = state.begin_quick_fill(Region::new(Point::new(100.0, 100.0), 40.0));

    // The fill finishes on the service side, but the session cancels first.
    let result = LocalPackingService::new().fill(&ticket.request).await;
    assert!(result.is_ok());
    state.cancel_quick_fill();

    assert_eq!(
        state.complete_quick_fill(ticket.id, result),
        QuickFillOutcome::Discarded
    );
    assert_eq!(state.scene().element_count(), 0);
}

#[tokio::test]
async fn test_teardown_cancels_in_flight_request() {
    let mut state = DesignerState::new();
    let ticket = state.begin_quick_fill(Region::new(Point::default(), 40.0));
    let service = SlowService {
        delay: Duration::from_secs(30),
    };

    let request = ticket.request.clone();
    let token = ticket.token.clone();
    let fill = tokio::spawn(async move { run_fill(&service, &request, &token).await });

    drop(state);
    let result = tokio::time::timeout(Duration::from_secs(5), fill)
        .await
        .expect("cancellation ends the fill promptly")
        .unwrap();
    assert_eq!(result.unwrap_err(), PackingError::Cancelled);
}

#[tokio::test]
async fn test_failed_fill_reports_message() {
    let mut state = DesignerState::new();
    let outcome = state
        .quick_fill(Region::new(Point::default(), 40.0), &FailingService)
        .await;
    let QuickFillOutcome::Failed(error) = outcome else {
        panic!("expected failure");
    };
    assert_eq!(error.to_string(), "Failed to fill region");
    assert_eq!(state.scene().element_count(), 0);
}

#[tokio::test]
async fn test_service_response_contract() {
    let region = Region::new(Point::new(50.0, 50.0), 40.0);
    let ticket_request = FillRequest::new(&region, &Default::default());
    let local = LocalPackingService::new()
        .fill(&ticket_request)
        .await
        .unwrap();

    // What a remote service would send back for the same fill.
    let body = serde_json::to_string(&FillResponse::from(&local)).unwrap();
    let response: FillResponse = serde_json::from_str(&body).unwrap();
    let remote = response.into_result(&ticket_request).unwrap();

    assert_eq!(remote.placements, local.placements);
    assert!(remote.report.service_report.is_some());
}

#[tokio::test]
async fn test_new_fill_supersedes_running_one() {
    let mut state = DesignerState::new();
    let first = state.begin_quick_fill(Region::new(Point::default(), 40.0));
    let second = state.begin_quick_fill(Region::new(Point::new(200.0, 0.0), 40.0));

    let first_result = run_fill(&LocalPackingService::new(), &first.request, &first.token).await;
    assert!(first_result.unwrap_err().is_cancelled());

    let second_result =
        run_fill(&LocalPackingService::new(), &second.request, &second.token).await;
    assert!(state.complete_quick_fill(second.id, second_result).is_applied());
}

#[tokio::test]
async fn test_fill_during_coalesced_drag_is_its_own_undo_step() {
    let mut config = Config::default();
    config.history.coalesce_drag = true;
    let mut state = DesignerState::with_config(config);
    state
        .import_svg("<svg><rect x='0' y='0' width='10' height='10'/></svg>")
        .unwrap();

    let ticket = state.begin_quick_fill(Region::new(Point::new(100.0, 100.0), 20.0));
    state.pointer_down(Point::new(5.0, 5.0)).unwrap();
    state.pointer_move(Point::new(6.0, 5.0)).unwrap();

    let result = LocalPackingService::new().fill(&ticket.request).await;
    let QuickFillOutcome::Applied { range, .. } = state.complete_quick_fill(ticket.id, result)
    else {
        panic!("expected applied outcome");
    };
    assert!(!range.is_empty());

    state.pointer_move(Point::new(7.0, 5.0)).unwrap();
    state.pointer_up(Point::new(7.0, 5.0)).unwrap();
    let total = state.scene().element_count();

    // The rest of the drag goes first, the stones stay.
    assert!(state.undo());
    assert_eq!(state.scene().element_count(), total);
    let rect = &state.scene().active_elements()[0];
    assert_eq!(rect.shape.bounds(), Some((1.0, 0.0, 11.0, 10.0)));

    // Then the fill, then the start of the drag.
    assert!(state.undo());
    assert_eq!(state.scene().element_count(), 1);
    assert!(state.undo());
    let rect = &state.scene().active_elements()[0];
    assert_eq!(rect.shape.bounds(), Some((0.0, 0.0, 10.0, 10.0)));
}

/// Answers one HTTP request with `status` and `body`, returning the base URL
/// and a handle yielding the request head.
async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let head = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        head
    });
    (format!("http://{}", addr), handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(end) = text.find("\r\n\r\n") {
            let head = text[..end].to_string();
            let length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                return head;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

#[tokio::test]
async fn test_remote_fill_decodes_service_response() {
    let region = Region::new(Point::new(50.0, 50.0), 30.0);
    let request = FillRequest::new(&region, &Default::default());
    let local = LocalPackingService::new().fill(&request).await.unwrap();
    let body = serde_json::to_string(&FillResponse::from(&local)).unwrap();

    let (endpoint, server) = serve_once("200 OK", body).await;
    let service = HttpPackingService::new(&endpoint, Duration::from_secs(5)).unwrap();
    let remote = service.fill(&request).await.unwrap();

    assert_eq!(remote.placements, local.placements);
    let head = server.await.unwrap();
    assert!(head.starts_with("POST /cad/auto-diamond-fill HTTP/1.1"));
}

#[tokio::test]
async fn test_remote_fill_maps_failures() {
    let request = FillRequest::new(&Region::new(Point::default(), 30.0), &Default::default());

    // Nothing listens on a port that was bound and released.
    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = closed.local_addr().unwrap();
    drop(closed);
    let endpoint = format!("http://{}", addr);
    let service = HttpPackingService::new(&endpoint, Duration::from_secs(5)).unwrap();
    let error = service.fill(&request).await.unwrap_err();
    assert!(matches!(error, PackingError::RequestFailed { .. }));
    assert_eq!(error.to_string(), "Failed to fill region");

    let (endpoint, _server) = serve_once("500 Internal Server Error", "{}".to_string()).await;
    let service = HttpPackingService::new(&endpoint, Duration::from_secs(5)).unwrap();
    let error = service.fill(&request).await.unwrap_err();
    assert!(matches!(error, PackingError::RequestFailed { .. }));

    let (endpoint, _server) = serve_once("200 OK", r#"{"diamond_report": {}}"#.to_string()).await;
    let service = HttpPackingService::new(&endpoint, Duration::from_secs(5)).unwrap();
    let error = service.fill(&request).await.unwrap_err();
    assert!(matches!(error, PackingError::InvalidResponse { .. }));
}
