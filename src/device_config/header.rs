use super::DeviceConfig;

const CONTINUATION: &str = " \\\n";

/// Turn PEM text into adjacent C string literals, one per non-empty line,
/// each ending in an escaped CRLF.
pub fn format_certificate(cert: &str) -> String {
    cert.lines()
        .filter(|line| !line.is_empty())
        .map(|line| format!("\"{line}\\r\\n\""))
        .collect::<Vec<_>>()
        .join(CONTINUATION)
}

pub fn render(config: &DeviceConfig) -> String {
    let auth = &config.authentication;
    format!(
        r#"#ifndef DEVICE_CONFIG_H
#define DEVICE_CONFIG_H

#define PROJECT_ID "{project_id}"
#define BROKER "{broker}"
#define PORT {port}
#define DEVICE_ID "{device_id}"

#define CA_CERTIFICATE  {ca}

#define DEVICE_CERTIFICATE  {cert}

#define DEVICE_PRIVATE_KEY  {key}

#endif // DEVICE_CONFIG_H
"#,
        project_id = config.project_id,
        broker = config.broker,
        port = config.port,
        device_id = config.device_id,
        ca = format_certificate(&auth.ca_certificate),
        cert = format_certificate(&auth.device_certificate),
        key = format_certificate(&auth.device_private_key),
    )
}
