use actix_files::NamedFile;
use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use futures_util::TryStreamExt;

use crate::routes::AppState;
use crate::services::{PhotoError, MAX_PHOTO_BYTES};

/// Configure photo routes
///
/// `/photos/list` registers ahead of `/photos/{filename}` so the listing is
/// not swallowed by the filename matcher.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/photos/upload", web::post().to(upload_photo))
        .route("/photos/list", web::get().to(list_photos))
        .route("/photos/{filename}", web::get().to(get_photo));
}

/// Upload a JPEG or PNG photo
///
/// POST /api/photos/upload, multipart field `file`
async fn upload_photo(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, PhotoError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| PhotoError::Upload(e.to_string()))?
    {
        // Plain form values carry no content type; the file part does.
        let Some(content_type) = field.content_type().map(|m| m.essence_str().to_string())
        else {
            continue;
        };

        let mut data = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| PhotoError::Upload(e.to_string()))?
        {
            if data.len() + chunk.len() > MAX_PHOTO_BYTES {
                return Err(PhotoError::TooLarge);
            }
            data.extend_from_slice(&chunk);
        }

        let photo = state.photos.save(&content_type, &data).await?;
        return Ok(HttpResponse::Created().json(photo));
    }

    Err(PhotoError::MissingFile)
}

/// Photos uploaded since startup, newest first
///
/// GET /api/photos/list
async fn list_photos(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.photos.list().await)
}

/// Serve an uploaded photo
///
/// GET /api/photos/{filename}
async fn get_photo(
    state: web::Data<AppState>,
    filename: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, PhotoError> {
    let path = state.photos.resolve(&filename).await?;
    let file = NamedFile::open_async(path).await?;
    Ok(file.into_response(&req))
}
