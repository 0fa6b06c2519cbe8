use eyre::Result;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A throwaway project tree: a project root the build directory lands in and
/// a separate directory standing in for the dependency (GLEW) checkout.
pub struct TestProject {
    pub temp_dir: TempDir,
    pub project_root: PathBuf,
    pub dependency_dir: PathBuf,
}

pub fn setup_test_project() -> Result<TestProject> {
    let temp_dir = tempfile::tempdir()?;

    let project_root = temp_dir.path().join("project");
    let dependency_dir = temp_dir.path().join("glew");
    std::fs::create_dir_all(&project_root)?;
    std::fs::create_dir_all(&dependency_dir)?;

    Ok(TestProject {
        temp_dir,
        project_root,
        dependency_dir,
    })
}

/// Write a stand-in generator script that records its arguments and working
/// directory into the directory it is run from, then exits with `exit_code`.
pub fn write_stub_generator(dir: &Path, exit_code: i32) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-generator.sh");
    std::fs::write(
        &script,
        format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > args.txt\npwd > cwd.txt\nexit {exit_code}\n"
        ),
    )?;

    let mut perms = std::fs::metadata(&script)?.permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms)?;

    Ok(script)
}

/// Write a config file overriding the generator program, so tests never
/// invoke a real cmake.
pub fn write_test_config(project: &TestProject, generator: &Path) -> Result<PathBuf> {
    let config = serde_json::json!({
        "build": { "program": generator.to_str().unwrap() }
    });

    let config_path = project.temp_dir.path().join("config.json");
    std::fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    Ok(config_path)
}

/// Spawn a minimal HTTP server on a random local port that answers every
/// request with the given status and body. Returns the base URL.
pub async fn spawn_http_server(status: u16, body: Vec<u8>) -> Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;

            let header = format!(
                "HTTP/1.1 {status} Test\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = socket.write_all(header.as_bytes()).await;
            let _ = socket.write_all(&body).await;
            let _ = socket.shutdown().await;
        }
    });

    Ok(format!("http://{addr}/stb_image.h"))
}
