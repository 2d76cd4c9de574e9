use std::sync::Arc;

use crate::application::services::metadata_service::MetadataService;
use crate::application::services::text_service::TextService;
use crate::domain::repositories::checksum_repository::ChecksumRepository;
use crate::domain::repositories::tokenizer_repository::TokenizerRepository;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::text::md5_checksum_repository::Md5ChecksumRepository;
use crate::infrastructure::text::whitespace_tokenizer_repository::WhitespaceTokenizerRepository;

pub(super) struct AppServices {
    pub text_service: Arc<TextService>,
    pub metadata_service: Arc<MetadataService>,
}

struct AppRepositories {
    tokenizer_repository: Arc<dyn TokenizerRepository>,
    checksum_repository: Arc<dyn ChecksumRepository>,
}

pub(super) fn build_services(config: &Arc<AppConfig>) -> AppServices {
    let repositories = build_repositories();

    AppServices {
        text_service: Arc::new(TextService::new(
            repositories.tokenizer_repository,
            repositories.checksum_repository,
        )),
        metadata_service: Arc::new(MetadataService::new(Arc::clone(config))),
    }
}

fn build_repositories() -> AppRepositories {
    AppRepositories {
        tokenizer_repository: Arc::new(WhitespaceTokenizerRepository::new()),
        checksum_repository: Arc::new(Md5ChecksumRepository::new()),
    }
}
