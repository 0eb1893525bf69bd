use std::io::ErrorKind;

use crate::log;

/// Persistence seam for the best score across sessions. Losing a high score
/// must never crash the game, so implementations report failures by logging
/// and falling back rather than returning errors.
pub trait ScoreStore {
    fn load_high_score(&self) -> u32;
    fn save_high_score(&mut self, score: u32);
}

/// One file holding the high score as a base-10 integer string.
pub struct FileScoreStore {
    file_path: String,
}

impl FileScoreStore {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ScoreStore for FileScoreStore {
    fn load_high_score(&self) -> u32 {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => match content.trim().parse() {
                Ok(score) => score,
                Err(_) => {
                    log!("Ignoring unparsable high score file {}", self.file_path);
                    0
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => 0,
            Err(err) => {
                log!("Failed to read high score file {}: {}", self.file_path, err);
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u32) {
        if let Err(err) = std::fs::write(&self.file_path, score.to_string()) {
            log!("Failed to write high score file {}: {}", self.file_path, err);
        }
    }
}
