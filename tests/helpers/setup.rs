use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use ruoyi_company_sdk::RuoyiSDK;
use serde_json::{json, Value};
use std::sync::Mutex;

pub const EXPORT_BYTES: &[u8] = b"PK\x03\x04company-export";

/// A request as the fake server received it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

type Requests = web::Data<Mutex<Vec<RecordedRequest>>>;

pub struct TestApp {
    pub address: String,
    requests: Requests,
}

impl TestApp {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn sdk_with_token(&self, token: &str) -> RuoyiSDK {
        RuoyiSDK::new(self.address.clone(), Some(token.to_string()))
    }
}

fn ack(msg: &str) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "code": 200, "msg": msg }))
}

async fn handle(req: HttpRequest, body: web::Bytes, requests: Requests) -> HttpResponse {
    let authorization = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .map(String::from);
    let body: Option<Value> = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };
    requests.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        authorization: authorization.clone(),
        body: body.clone(),
    });

    match authorization.as_deref() {
        Some("Bearer expired") => return HttpResponse::Unauthorized().finish(),
        Some("Bearer readonly") => return HttpResponse::Forbidden().finish(),
        _ => (),
    }

    match (req.method().as_str(), req.path()) {
        ("GET", "/system/company/list") => HttpResponse::Ok().json(json!({
            "code": 200,
            "msg": "ok",
            "rows": [
                { "id": 1, "name": "Acme", "city": "Shenzhen", "status": "0" },
                { "id": 2, "name": "Acme Labs", "city": "Hangzhou", "status": "1" }
            ],
            "total": 2,
            "pageNum": 1,
            "pageSize": 10,
            "hasNext": false
        })),
        ("GET", "/system/company/missing") => HttpResponse::NotFound().finish(),
        ("GET", "/system/company/broken") => HttpResponse::Ok()
            .content_type("application/json")
            .body("{not json"),
        ("GET", "/system/company/crash") => HttpResponse::InternalServerError().finish(),
        ("GET", path) => {
            let id = path.trim_start_matches("/system/company/");
            let id = id
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| Value::from(id));
            HttpResponse::Ok().json(json!({
                "code": 200,
                "msg": "ok",
                "data": { "id": id, "name": "Acme", "status": "0" }
            }))
        }
        ("POST", "/system/company/export") => HttpResponse::Ok()
            .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
            .body(EXPORT_BYTES),
        ("POST", "/system/company") | ("PUT", "/system/company") => {
            let duplicate = body
                .as_ref()
                .and_then(|body| body.get("name"))
                .and_then(Value::as_str)
                == Some("Duplicate");
            if duplicate {
                HttpResponse::Ok().json(json!({
                    "code": 500,
                    "msg": "Company name already exists"
                }))
            } else {
                ack("Saved")
            }
        }
        ("DELETE", _) => ack("Deleted"),
        _ => HttpResponse::MethodNotAllowed().finish(),
    }
}

// Launch a fake administration api as a background task
pub async fn spawn_app() -> (TestApp, RuoyiSDK) {
    let requests: Requests = web::Data::new(Mutex::new(Vec::new()));
    let server_requests = requests.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(server_requests.clone())
            .default_service(web::route().to(handle))
    })
    .workers(1)
    .bind("127.0.0.1:0")
    .expect("Failed to bind fake server");

    let port = server.addrs()[0].port();
    let address = format!("http://127.0.0.1:{}", port);
    let _ = actix_web::rt::spawn(server.run());

    let sdk = RuoyiSDK::new(address.clone(), None);
    (TestApp { address, requests }, sdk)
}
