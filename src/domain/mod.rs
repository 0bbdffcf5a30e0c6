// Domain layer: file model, regions and the object store port.

pub mod model;
pub mod ports;
pub mod region;

/// Default COS host for a bucket: `{bucket}.cos.{region}.myqcloud.com`
pub fn cos_domain(bucket: &str, region: &str) -> String {
    format!("{}.cos.{}.myqcloud.com", bucket, region)
}
