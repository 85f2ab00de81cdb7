use std::collections::BTreeMap;

use crate::generator::yaml::clash::{
    ClashProxy, CommonProxyOptions, GrpcOpts, H2Opts, HttpOpts, Hysteria2Proxy, RealityOpts,
    ShadowsocksProxy, TransportOpts, TrojanProxy, TuicProxy, VMessProxy, VlessProxy, WsOpts,
};
use crate::models::{ProxyKind, ProxyRecord, TlsOptions, Transport, VlessSecurity};

fn alpn(tls: &TlsOptions) -> Option<Vec<String>> {
    (!tls.alpn.is_empty()).then(|| tls.alpn.clone())
}

fn transport_opts(transport: &Transport) -> TransportOpts {
    let mut opts = TransportOpts::default();
    match transport {
        Transport::Tcp => {}
        Transport::Ws { path, host } => {
            opts.ws_opts = Some(WsOpts {
                path: path.clone().unwrap_or_else(|| "/".to_string()),
                headers: host
                    .iter()
                    .map(|h| ("Host".to_string(), h.clone()))
                    .collect(),
            });
        }
        Transport::Grpc { service_name } => {
            opts.grpc_opts = Some(GrpcOpts {
                grpc_service_name: service_name.clone().unwrap_or_default(),
            });
        }
        Transport::H2 { path, host } => {
            opts.h2_opts = Some(H2Opts {
                host: host.iter().cloned().collect(),
                path: path.clone().unwrap_or_else(|| "/".to_string()),
            });
        }
        Transport::Http { path, host } => {
            let mut headers = BTreeMap::new();
            if let Some(host) = host {
                headers.insert("Host".to_string(), vec![host.clone()]);
            }
            opts.http_opts = Some(HttpOpts {
                path: vec![path.clone().unwrap_or_else(|| "/".to_string())],
                headers,
            });
        }
    }
    opts
}

impl From<&ProxyRecord> for ClashProxy {
    fn from(node: &ProxyRecord) -> Self {
        let common = CommonProxyOptions::new(node.name.clone(), node.server.clone(), node.port);

        match &node.kind {
            ProxyKind::VMess {
                uuid,
                alter_id,
                cipher,
                tls,
                transport,
            } => ClashProxy::VMess(VMessProxy {
                common,
                uuid: uuid.clone(),
                alter_id: *alter_id,
                cipher: cipher.clone(),
                tls: tls.is_some(),
                skip_cert_verify: tls.as_ref().map(|t| t.skip_cert_verify),
                servername: tls.as_ref().and_then(|t| t.server_name.clone()),
                alpn: tls.as_ref().and_then(alpn),
                network: transport.network().to_string(),
                transport: transport_opts(transport),
            }),
            ProxyKind::Vless {
                uuid,
                flow,
                security,
                transport,
            } => {
                let (tls, reality) = match security {
                    VlessSecurity::None => (None, None),
                    VlessSecurity::Tls(tls) => (Some(tls), None),
                    VlessSecurity::Reality { tls, reality } => (Some(tls), Some(reality)),
                };
                ClashProxy::Vless(VlessProxy {
                    common,
                    uuid: uuid.clone(),
                    flow: flow.clone(),
                    tls: tls.is_some(),
                    skip_cert_verify: tls.map(|t| t.skip_cert_verify),
                    // reality still needs the camouflage domain as servername
                    servername: tls.and_then(|t| t.server_name.clone()),
                    alpn: tls.and_then(alpn),
                    client_fingerprint: reality.and_then(|r| r.client_fingerprint.clone()),
                    reality_opts: reality.map(|r| RealityOpts {
                        public_key: r.public_key.clone(),
                        short_id: r.short_id.clone(),
                    }),
                    network: transport.network().to_string(),
                    transport: transport_opts(transport),
                })
            }
            ProxyKind::Trojan {
                password,
                tls,
                transport,
            } => ClashProxy::Trojan(TrojanProxy {
                common,
                password: password.clone(),
                sni: tls.server_name.clone(),
                skip_cert_verify: tls.skip_cert_verify,
                alpn: alpn(tls),
                network: transport.network().to_string(),
                transport: transport_opts(transport),
            }),
            ProxyKind::Shadowsocks { cipher, password } => {
                ClashProxy::Shadowsocks(ShadowsocksProxy {
                    common,
                    cipher: cipher.clone(),
                    password: password.clone(),
                })
            }
            ProxyKind::Hysteria2 {
                password,
                tls,
                obfs,
            } => ClashProxy::Hysteria2(Hysteria2Proxy {
                common,
                password: password.clone(),
                sni: tls.server_name.clone(),
                skip_cert_verify: tls.skip_cert_verify,
                alpn: alpn(tls),
                obfs: obfs.as_ref().map(|o| o.kind.clone()),
                obfs_password: obfs.as_ref().and_then(|o| o.password.clone()),
            }),
            ProxyKind::Tuic {
                uuid,
                password,
                tls,
                disable_sni,
                congestion_controller,
                udp_relay_mode,
            } => ClashProxy::Tuic(TuicProxy {
                common,
                uuid: uuid.clone(),
                password: password.clone(),
                sni: tls.server_name.clone(),
                skip_cert_verify: tls.skip_cert_verify,
                alpn: alpn(tls),
                disable_sni: *disable_sni,
                reduce_rtt: true,
                congestion_controller: congestion_controller.clone(),
                udp_relay_mode: udp_relay_mode.clone(),
            }),
        }
    }
}
