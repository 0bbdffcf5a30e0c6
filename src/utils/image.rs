use crate::domain::model::ImageDimensions;
use image::ImageReader;
use std::io::Cursor;

/// 從 buffer 讀出圖片尺寸，只解析檔頭。
///
/// Anything that is not a decodable raster image yields `None`; this never
/// fails, so it can not block an upload.
pub fn probe_dimensions(buffer: &[u8]) -> Option<ImageDimensions> {
    if buffer.is_empty() {
        return None;
    }

    let reader = match ImageReader::new(Cursor::new(buffer)).with_guessed_format() {
        Ok(reader) => reader,
        Err(e) => {
            tracing::debug!("Image format sniffing failed: {}", e);
            return None;
        }
    };

    let format = reader.format();
    match reader.into_dimensions() {
        Ok((width, height)) => {
            tracing::debug!(?format, width, height, "Probed image dimensions");
            Some(ImageDimensions { width, height })
        }
        Err(e) => {
            tracing::debug!("Buffer is not a decodable image: {}", e);
            None
        }
    }
}
