//! 记录审计
//!
//! 能力矩阵中标记为不支持的记录类型在提交前即被拒绝。

use crate::capabilities::CapabilityEntry;
use crate::error::ProviderError;
use crate::types::RecordConfig;

use super::{FEATURES, PROVIDER_NAME};

/// 返回所有不被支持的记录，空表示通过
pub fn audit_records(records: &[RecordConfig]) -> Vec<ProviderError> {
    records
        .iter()
        .filter_map(|record| {
            let capability = record.record_type.required_capability()?;
            if FEATURES.supports(capability) {
                return None;
            }
            let reason = FEATURES
                .get(capability)
                .and_then(CapabilityEntry::reason)
                .unwrap_or("record type not supported by this provider");
            Some(ProviderError::UnsupportedRecord {
                provider: PROVIDER_NAME.to_string(),
                record_type: record.record_type.to_string(),
                record_name: record.name.clone(),
                reason: reason.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DnsRecordType;

    fn record(name: &str, record_type: DnsRecordType, value: &str) -> RecordConfig {
        RecordConfig {
            name: name.to_string(),
            record_type,
            value: value.to_string(),
            ttl: 3600,
        }
    }

    #[test]
    fn test_common_records_pass() {
        let records = vec![
            record("@", DnsRecordType::A, "192.0.2.1"),
            record("www", DnsRecordType::Cname, "example.com."),
            record("@", DnsRecordType::Txt, "v=spf1 -all"),
            record("@", DnsRecordType::Mx, "10 mail.example.com."),
        ];
        assert!(audit_records(&records).is_empty());
    }

    #[test]
    fn test_unsupported_types_reported() {
        let records = vec![
            record("@", DnsRecordType::A, "192.0.2.1"),
            record("_sip._tcp", DnsRecordType::Srv, "10 60 5060 sip.example.com."),
            record("@", DnsRecordType::Caa, "0 issue \"letsencrypt.org\""),
            record("1", DnsRecordType::Ptr, "host.example.com."),
            record("@", DnsRecordType::Alias, "lb.example.net."),
        ];
        let findings = audit_records(&records);
        assert_eq!(findings.len(), 4);
        assert!(matches!(
            &findings[0],
            ProviderError::UnsupportedRecord { record_type, record_name, .. }
                if record_type == "SRV" && record_name == "_sip._tcp"
        ));
    }
}
