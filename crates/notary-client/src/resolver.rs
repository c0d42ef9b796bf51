//! DNS lookups behind a small trait so the client can be driven by any
//! resolver.
//!
//! [`HickoryResolver`] is the production implementation. It is also the only
//! place that inspects resolver errors: [`is_name_not_found`] decides which
//! failures mean "the notary has nothing for this name".

use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::ProtoErrorKind;
use hickory_resolver::{ResolveError, TokioResolver};
use notary_core::{NotaryError, Result};
use std::net::IpAddr;
use thiserror::Error;

/// Failure of a single lookup
#[derive(Error, Debug)]
pub enum LookupError {
    /// The queried name has no records
    #[error("name does not exist")]
    NameNotFound,

    /// Any other resolver failure, passed through unchanged
    #[error(transparent)]
    Resolver(Box<dyn std::error::Error + Send + Sync>),
}

/// Record lookups the notary protocol needs
#[async_trait]
pub trait NotaryResolver: Send + Sync {
    /// Resolve the addresses (A/AAAA) of `name`
    async fn lookup_addrs(&self, name: &str) -> std::result::Result<Vec<IpAddr>, LookupError>;

    /// Resolve the TXT records of `name`, one string per record
    async fn lookup_txt(&self, name: &str) -> std::result::Result<Vec<String>, LookupError>;
}

/// Returns true if `err` says the queried name has no records.
///
/// Only an NXDOMAIN or an empty NOERROR answer counts. Hickory reports
/// SERVFAIL, REFUSED and other failure codes through the same no-records
/// error kind, so the response code has to be checked.
pub fn is_name_not_found(err: &ResolveError) -> bool {
    err.proto().is_some_and(|proto| {
        matches!(
            proto.kind(),
            ProtoErrorKind::NoRecordsFound {
                response_code: ResponseCode::NXDomain | ResponseCode::NoError,
                ..
            }
        )
    })
}

fn classify(err: ResolveError) -> LookupError {
    if is_name_not_found(&err) {
        LookupError::NameNotFound
    } else {
        LookupError::Resolver(Box::new(err))
    }
}

/// [`NotaryResolver`] backed by `hickory-resolver`
pub struct HickoryResolver {
    inner: TokioResolver,
}

impl HickoryResolver {
    /// Resolver using the system configuration (`/etc/resolv.conf` or the
    /// platform equivalent)
    pub fn system() -> Result<Self> {
        let inner = TokioResolver::builder_tokio()
            .map_err(|e| NotaryError::Config(format!("failed to load system resolver: {e}")))?
            .build();
        Ok(Self { inner })
    }

    /// Resolver that only talks to the given nameservers
    #[must_use]
    pub fn with_nameservers(nameservers: &[IpAddr], port: u16) -> Self {
        let group = NameServerConfigGroup::from_ips_clear(nameservers, port, true);
        let config = ResolverConfig::from_parts(None, Vec::new(), group);
        let inner =
            TokioResolver::builder_with_config(config, TokioConnectionProvider::default()).build();
        Self { inner }
    }
}

#[async_trait]
impl NotaryResolver for HickoryResolver {
    async fn lookup_addrs(&self, name: &str) -> std::result::Result<Vec<IpAddr>, LookupError> {
        let response = self.inner.lookup_ip(name).await.map_err(classify)?;
        Ok(response.iter().collect())
    }

    async fn lookup_txt(&self, name: &str) -> std::result::Result<Vec<String>, LookupError> {
        let response = self.inner.txt_lookup(name).await.map_err(classify)?;

        // A record split into several character-strings is one value
        Ok(response
            .iter()
            .map(|txt| {
                txt.iter()
                    .map(|data| String::from_utf8_lossy(data))
                    .collect::<String>()
            })
            .collect())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use hickory_resolver::proto::op::{Message, Query};
    use hickory_resolver::proto::rr::rdata::{A, TXT};
    use hickory_resolver::proto::rr::{RData, Record, RecordType};
    use hickory_resolver::proto::ProtoError;
    use std::net::{Ipv4Addr, UdpSocket};
    use tokio_test::{assert_err, assert_ok};

    /// Serve `respond` on a loopback UDP port until the test process exits.
    pub fn spawn_dns_stub<F>(respond: F) -> u16
    where
        F: Fn(&Message) -> Message + Send + 'static,
    {
        let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
        let port = socket.local_addr().unwrap().port();
        std::thread::spawn(move || {
            let mut buf = [0u8; 4096];
            while let Ok((len, peer)) = socket.recv_from(&mut buf) {
                let Ok(request) = Message::from_vec(&buf[..len]) else {
                    continue;
                };
                if let Ok(bytes) = respond(&request).to_vec() {
                    let _ = socket.send_to(&bytes, peer);
                }
            }
        });
        port
    }

    /// Response to `request` carrying `code` and the given answers.
    pub fn reply(request: &Message, code: ResponseCode, answers: Vec<Record>) -> Message {
        let mut response = Message::error_msg(request.id(), request.op_code(), code);
        response.add_queries(request.queries().iter().cloned());
        response.add_answers(answers);
        response
    }

    /// Stub that answers every query with `code` and no records.
    pub fn rcode_stub(code: ResponseCode) -> u16 {
        spawn_dns_stub(move |request| reply(request, code, Vec::new()))
    }

    /// Stub that answers A queries with `addr` and TXT queries with `txt`.
    pub fn record_stub(addr: Ipv4Addr, txt: &'static str) -> u16 {
        spawn_dns_stub(move |request| {
            let answers = request
                .queries()
                .iter()
                .filter_map(|query| {
                    let rdata = match query.query_type() {
                        RecordType::A => RData::A(A(addr)),
                        RecordType::TXT => RData::TXT(TXT::new(vec![txt.to_string()])),
                        _ => return None,
                    };
                    Some(Record::from_rdata(query.name().clone(), 60, rdata))
                })
                .collect();
            reply(request, ResponseCode::NoError, answers)
        })
    }

    fn stub_resolver(port: u16) -> HickoryResolver {
        HickoryResolver::with_nameservers(&[IpAddr::from(Ipv4Addr::LOCALHOST)], port)
    }

    fn no_records(code: ResponseCode) -> ResolveError {
        ProtoError::nx_error(Box::<Query>::default(), None, None, None, code, false, None).into()
    }

    #[test]
    fn transport_errors_are_not_absence() {
        let err = ResolveError::from("request timed out");
        assert!(!is_name_not_found(&err));
        assert!(matches!(classify(err), LookupError::Resolver(_)));
    }

    #[test]
    fn only_nxdomain_and_nodata_mean_absent() {
        assert!(is_name_not_found(&no_records(ResponseCode::NXDomain)));
        assert!(is_name_not_found(&no_records(ResponseCode::NoError)));
        for code in [
            ResponseCode::ServFail,
            ResponseCode::Refused,
            ResponseCode::FormErr,
            ResponseCode::NotImp,
        ] {
            let err = no_records(code);
            assert!(err.is_no_records_found());
            assert!(!is_name_not_found(&err), "{code:?}");
        }
    }

    #[tokio::test]
    async fn nxdomain_from_server_is_not_found() {
        let resolver = stub_resolver(rcode_stub(ResponseCode::NXDomain));
        let err = assert_err!(resolver.lookup_addrs("00.notary.test").await);
        assert!(matches!(err, LookupError::NameNotFound));
        let err = assert_err!(resolver.lookup_txt("00.notary.test").await);
        assert!(matches!(err, LookupError::NameNotFound));
    }

    #[tokio::test]
    async fn server_failures_are_resolver_errors() {
        for code in [ResponseCode::ServFail, ResponseCode::Refused] {
            let resolver = stub_resolver(rcode_stub(code));
            let err = assert_err!(resolver.lookup_addrs("00.notary.test").await);
            assert!(matches!(err, LookupError::Resolver(_)), "{code:?}");
            let err = assert_err!(resolver.lookup_txt("00.notary.test").await);
            assert!(matches!(err, LookupError::Resolver(_)), "{code:?}");
        }
    }

    #[tokio::test]
    async fn records_from_server() {
        let resolver = stub_resolver(record_stub(Ipv4Addr::new(127, 0, 0, 2), "version=1"));
        let addrs = assert_ok!(resolver.lookup_addrs("00.notary.test").await);
        assert_eq!(addrs, vec![IpAddr::from([127, 0, 0, 2])]);
        let txt = assert_ok!(resolver.lookup_txt("00.notary.test").await);
        assert_eq!(txt, vec!["version=1".to_string()]);
    }
}
