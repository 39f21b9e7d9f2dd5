use cloudlocate::DetectionResult;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/// Print `Cloud: <provider>, Region: <region>` to stdout.
pub fn detection_result(result: &DetectionResult) {
    println!("{result}");
}
