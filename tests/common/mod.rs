use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/*-------------------------------------------------------------------------------------------------
  One-shot HTTP Server
-------------------------------------------------------------------------------------------------*/

/// Serves a single canned HTTP response on a loopback port and hands back the raw request.
pub struct OneShotServer {
    url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    pub fn start(path: &str, status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}{}", listener.local_addr().unwrap(), path);

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();

            let mut request = Vec::new();
            let mut buffer = [0u8; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                let read = stream.read(&mut buffer).unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buffer[..read]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\n\
                 Content-Type: text/plain\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\
                 \r\n\
                 {body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            String::from_utf8_lossy(&request).into_owned()
        });

        Self { url, handle }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Wait for the request to be served and return it.
    pub fn request(self) -> String {
        self.handle.join().unwrap()
    }
}

/*-------------------------------------------------------------------------------------------------
  Silent Server
-------------------------------------------------------------------------------------------------*/

/// Loopback listener that never accepts. Connections complete in the kernel backlog and the
/// request is never answered, so clients wait until their timeout.
#[allow(dead_code)]
pub struct SilentServer {
    url: String,
    _listener: TcpListener,
}

#[allow(dead_code)]
impl SilentServer {
    pub fn start(path: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}{}", listener.local_addr().unwrap(), path);

        Self {
            url,
            _listener: listener,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/*-------------------------------------------------------------------------------------------------
  Fixtures
-------------------------------------------------------------------------------------------------*/

pub const IP_RANGES_JSON: &str = r#"{
  "syncToken": "1722456191",
  "createDate": "2024-07-31-20-03-11",
  "prefixes": [
    {
      "ip_prefix": "3.5.0.0/16",
      "region": "ap-northeast-3",
      "network_border_group": "ap-northeast-3",
      "service": "EC2"
    },
    {
      "ip_prefix": "52.95.0.0/16",
      "region": "us-east-1",
      "network_border_group": "us-east-1",
      "service": "S3"
    }
  ],
  "ipv6_prefixes": []
}"#;

/// An unused loopback port; connections are refused.
pub const UNREACHABLE: &str = "http://127.0.0.1:1";
