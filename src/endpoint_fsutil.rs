extern crate argparse;
extern crate env_logger;
extern crate libextractfs;

use argparse::{ArgumentParser, Collect, StoreConst, StoreTrue};
use std::process;

use libextractfs::create::DirectoryCreator;
use libextractfs::delete::delete_file;
use libextractfs::fs::NativeFilesystem;

#[derive(Copy, Clone)]
enum FsOperation {
    CreateDirectory,
    DeleteFile,
}

fn main() {
    let mut operation = FsOperation::CreateDirectory;
    let mut verbose = false;
    let mut paths: Vec<String> = Vec::new();

    {
        let mut ap = ArgumentParser::new();

        ap.set_description(
            "Exercise the host filesystem layer used by the extraction tools.",
        );

        ap.refer(&mut operation)
            .add_option(
                &["-p", "--mkdir"],
                StoreConst(FsOperation::CreateDirectory),
                "Create a directory, including any missing parents.",
            )
            .add_option(
                &["-d", "--delete"],
                StoreConst(FsOperation::DeleteFile),
                "Delete a file.",
            );
        ap.refer(&mut verbose)
            .add_option(&["-v"], StoreTrue, "Verbose mode");
        ap.refer(&mut paths)
            .add_argument("path", Collect, "Paths to operate on.");

        ap.parse_args_or_exit();
    }

    env_logger::init();

    let creator = DirectoryCreator::new(NativeFilesystem);
    let mut exit_code = 0;

    for path in &paths {
        match operation {
            FsOperation::CreateDirectory => match creator.create_directory(path) {
                Ok(()) => {
                    if verbose {
                        println!("{}", path);
                    }
                }
                Err(error) => {
                    eprintln!("{}: {}", path, error);
                    exit_code = error.os_code();
                }
            },
            FsOperation::DeleteFile => {
                delete_file(creator.as_inner_filesystem(), path);

                if verbose {
                    println!("{}", path);
                }
            }
        }
    }

    process::exit(exit_code);
}
