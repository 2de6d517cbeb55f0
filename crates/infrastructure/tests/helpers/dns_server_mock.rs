#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Answer section entry, written with a pointer to the question name.
#[derive(Debug, Clone)]
pub enum MockRecord {
    A(std::net::Ipv4Addr),
    Aaaa(std::net::Ipv6Addr),
    Cname(String),
    Ns(String),
    Txt(String),
}

#[derive(Debug, Clone)]
pub enum MockReply {
    Answer {
        authoritative: bool,
        records: Vec<MockRecord>,
    },
    /// Empty answer section, NS records in the authority section.
    Referral(Vec<String>),
    /// Bytes that do not decode as a DNS message.
    Garbage,
    /// Reads the query and never answers.
    Silent,
}

/// Loopback UDP server that answers every query with the same reply.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    last_rd: Arc<AtomicBool>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(reply: MockReply) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let queries = Arc::new(AtomicUsize::new(0));
        let last_rd = Arc::new(AtomicBool::new(false));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let counter = Arc::clone(&queries);
        let rd_flag = Arc::clone(&last_rd);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if len > 2 {
                                rd_flag.store(buf[2] & 0x01 == 0x01, Ordering::SeqCst);
                            }
                            if let Some(response) = Self::build_response(&buf[..len], &reply) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            last_rd,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Server entry as the resolver config spells it.
    pub fn server(&self) -> String {
        self.addr.to_string()
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn last_query_recursion_desired(&self) -> bool {
        self.last_rd.load(Ordering::SeqCst)
    }

    pub fn build_response(query: &[u8], reply: &MockReply) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let (authoritative, answers, referrals): (bool, &[MockRecord], &[String]) = match reply {
            MockReply::Silent => return None,
            MockReply::Garbage => return Some(vec![0xde, 0xad, 0xbe, 0xef]),
            MockReply::Answer {
                authoritative,
                records,
            } => (*authoritative, records, &[]),
            MockReply::Referral(names) => (false, &[], names),
        };

        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&query[0..2]);

        // QR, opcode QUERY, AA as scripted, RD echoed; RA clear, NOERROR
        let mut flags = 0x80 | (query[2] & 0x01);
        if authoritative {
            flags |= 0x04;
        }
        response.push(flags);
        response.push(0x00);

        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
        response.extend_from_slice(&(referrals.len() as u16).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..]);

        for record in answers {
            let (rtype, rdata) = Self::encode_rdata(record);
            Self::push_record(&mut response, rtype, &rdata);
        }

        for name in referrals {
            Self::push_record(&mut response, 2, &encode_name(name));
        }

        Some(response)
    }

    fn encode_rdata(record: &MockRecord) -> (u16, Vec<u8>) {
        match record {
            MockRecord::A(ip) => (1, ip.octets().to_vec()),
            MockRecord::Aaaa(ip) => (28, ip.octets().to_vec()),
            MockRecord::Cname(target) => (5, encode_name(target)),
            MockRecord::Ns(target) => (2, encode_name(target)),
            MockRecord::Txt(text) => {
                let mut rdata = vec![text.len() as u8];
                rdata.extend_from_slice(text.as_bytes());
                (16, rdata)
            }
        }
    }

    fn push_record(response: &mut Vec<u8>, rtype: u16, rdata: &[u8]) {
        response.extend_from_slice(&[0xc0, 0x0c]);
        response.extend_from_slice(&rtype.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(rdata);
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.len() + 2);
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}
