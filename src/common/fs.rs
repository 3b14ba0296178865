//! Common file system operations

use std::fs;
use std::path::Path;

/// Copy a directory tree recursively, used to hand a cached SDK payload
/// over into the build directory.
pub fn copy_dir_recursive<P1, P2>(src: P1, dst: P2) -> std::io::Result<()>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let src_ref = src.as_ref();
    let dst_ref = dst.as_ref();

    if !dst_ref.exists() {
        fs::create_dir_all(dst_ref)?;
    }

    for entry in fs::read_dir(src_ref)? {
        let entry = entry?;
        let entry_path = entry.path();
        let dst_path = dst_ref.join(entry.file_name());

        if entry_path.is_dir() {
            copy_dir_recursive(&entry_path, &dst_path)?;
        } else {
            fs::copy(&entry_path, &dst_path)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_dir_recursive() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");

        fs::create_dir_all(src.join("sdk/1.0.0")).unwrap();
        fs::write(src.join("VERSION"), "1.0.0").unwrap();
        fs::write(src.join("sdk/1.0.0/dotnet.dll"), "payload").unwrap();

        copy_dir_recursive(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("VERSION")).unwrap(), "1.0.0");
        assert_eq!(
            fs::read_to_string(dst.join("sdk/1.0.0/dotnet.dll")).unwrap(),
            "payload"
        );
    }
}
