use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

const SESSION_KEY: &str = "session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub role: String,
    pub experience: Experience,
    pub resume_file: Option<FileRef>,
    pub job_desc_file: Option<FileRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Experience {
    Years(u32),
    Text(String),
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Experience::Years(years) => write!(f, "{years}"),
            Experience::Text(text) => f.write_str(text),
        }
    }
}

/// An uploaded file, known by name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
}

impl FileRef {
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("`{}` does not name a file", path.display()))?;

        Ok(Self {
            name: name.to_owned(),
        })
    }
}

impl Session {
    pub fn new(
        role: &str,
        experience: &str,
        resume: Option<&Path>,
        job_description: Option<&Path>,
    ) -> Result<Self> {
        let role = role.trim();
        let experience = experience.trim();

        let (Some(resume), Some(job_description)) = (resume, job_description) else {
            bail!("Please fill all fields and upload both files!");
        };
        if role.is_empty() || experience.is_empty() {
            bail!("Please fill all fields and upload both files!");
        }

        let experience = match experience.parse() {
            Ok(years) => Experience::Years(years),
            Err(_) => Experience::Text(experience.to_owned()),
        };

        Ok(Self {
            role: role.to_owned(),
            experience,
            resume_file: Some(FileRef::from_path(resume)?),
            job_desc_file: Some(FileRef::from_path(job_description)?),
        })
    }
}

pub trait SessionStore {
    /// The stored session, or `None` when nothing usable is stored.
    async fn get(&self) -> Option<Session>;

    async fn set(&self, session: &Session) -> Result<()>;
}

pub struct DiskSessionStore {
    store_dir: PathBuf,
}

impl DiskSessionStore {
    pub async fn new(store_dir: Option<PathBuf>) -> Result<Self> {
        let store_dir = match store_dir {
            Some(dir) => dir,
            None => get_store_directory()?,
        };

        tokio::fs::create_dir_all(&store_dir)
            .await
            .context("Failed to create session store directory")?;

        Ok(Self { store_dir })
    }
}

impl SessionStore for DiskSessionStore {
    async fn get(&self) -> Option<Session> {
        let data = cacache::read(&self.store_dir, SESSION_KEY).await.ok()?;

        match serde_json::from_slice(&data) {
            Ok(session) => Some(session),
            Err(error) => {
                tracing::warn!(%error, "Ignoring unreadable stored session");
                None
            }
        }
    }

    async fn set(&self, session: &Session) -> Result<()> {
        let serialized = serde_json::to_vec(session).context("Failed to serialize session")?;

        cacache::write(&self.store_dir, SESSION_KEY, serialized)
            .await
            .context("Failed to write session")?;

        Ok(())
    }
}

fn get_store_directory() -> Result<PathBuf> {
    let data_base = dirs::data_local_dir().context("Failed to determine local data directory")?;
    Ok(data_base.join(env!("CARGO_CRATE_NAME")))
}

#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemorySessionStore(std::sync::Mutex<Option<Session>>);

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    async fn get(&self) -> Option<Session> {
        self.0.lock().unwrap().clone()
    }

    async fn set(&self, session: &Session) -> Result<()> {
        *self.0.lock().unwrap() = Some(session.clone());
        Ok(())
    }
}
